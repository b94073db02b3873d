//! Version comparison and reporting

use tracing::debug;

use crate::logging::sink::LogSink;
use crate::update::error::UpdateError;
use crate::update::github::GitHubReleaseSource;
use crate::update::source::ReleaseSource;
use crate::update::types::{ComparisonResult, VersionQuery};

const API_PREFIX: &str = "api.github.com/repos";
const WEB_PREFIX: &str = "github.com";

/// Checks a plugin's version against its latest published release
pub struct UpdateChecker<S: ReleaseSource = GitHubReleaseSource> {
    source: S,
}

impl UpdateChecker<GitHubReleaseSource> {
    pub fn new() -> Self {
        Self::with_source(GitHubReleaseSource::new())
    }
}

impl Default for UpdateChecker<GitHubReleaseSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ReleaseSource> UpdateChecker<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Fetches the latest release and compares it with the queried version.
    pub async fn check(&self, query: &VersionQuery) -> Result<ComparisonResult, UpdateError> {
        let release = self
            .source
            .fetch_latest_release(&query.release_endpoint)
            .await?;

        debug!(
            "Latest release for {}: {:?}",
            query.plugin_name, release.tag_name
        );

        Ok(compare_versions(
            &query.current_version,
            release.tag_name.as_deref(),
            &query.release_endpoint,
        ))
    }

    /// Runs a check and reports every outcome, failures included, to `sink`.
    pub async fn check_for_updates(
        &self,
        plugin_name: &str,
        plugin_version: &str,
        release_api_url: &str,
        sink: &dyn LogSink,
    ) {
        let query = VersionQuery::new(plugin_name, plugin_version, release_api_url);

        match self.check(&query).await {
            Ok(result) => report_result(plugin_name, &result, sink),
            Err(e) => report_error(plugin_name, &e, sink),
        }
    }
}

/// Runs a reporting check against the GitHub releases API.
pub async fn check_for_updates(
    plugin_name: &str,
    plugin_version: &str,
    release_api_url: &str,
    sink: &dyn LogSink,
) {
    UpdateChecker::new()
        .check_for_updates(plugin_name, plugin_version, release_api_url, sink)
        .await;
}

/// Compares `v<current_version>` with `latest_tag`, ignoring case.
///
/// This is exact string equality: `v1.0` and `v1.0.0` differ, and a tag
/// published without the `v` prefix never matches.
pub fn compare_versions(
    current_version: &str,
    latest_tag: Option<&str>,
    release_endpoint: &str,
) -> ComparisonResult {
    let Some(latest) = latest_tag else {
        return ComparisonResult::Indeterminate;
    };

    let current = format!("v{}", current_version);
    if current.to_lowercase() == latest.to_lowercase() {
        return ComparisonResult::UpToDate;
    }

    ComparisonResult::UpdateAvailable {
        latest: latest.to_string(),
        current,
        download_url: download_link(release_endpoint),
    }
}

/// Maps a releases API URL to the matching web page.
pub fn download_link(release_endpoint: &str) -> String {
    release_endpoint.replace(API_PREFIX, WEB_PREFIX)
}

fn report_result(plugin_name: &str, result: &ComparisonResult, sink: &dyn LogSink) {
    match result {
        ComparisonResult::UpToDate => {
            sink.info(&format!(
                "[{}] You are running the latest version.",
                plugin_name
            ));
        }
        ComparisonResult::UpdateAvailable {
            latest,
            current,
            download_url,
        } => {
            sink.info(&format!(
                "[{}] New {} available, you are running an OUTDATED {}!",
                plugin_name, latest, current
            ));
            sink.info(&format!(
                "[{}] Download the latest version from: {}",
                plugin_name, download_url
            ));
        }
        ComparisonResult::Indeterminate => {
            sink.warn(&format!(
                "[{}] Could not determine the latest version.",
                plugin_name
            ));
        }
    }
}

fn report_error(plugin_name: &str, error: &UpdateError, sink: &dyn LogSink) {
    match error {
        UpdateError::RateLimited { .. } => sink.warn(&format!(
            "[{}] Rate limited, can't check for a new plugin version. This should resolve itself within an hour.",
            plugin_name
        )),
        UpdateError::UnexpectedStatus(status) => sink.warn(&format!(
            "[{}] Unexpected response code: {}. Unable to check for a new plugin version.",
            plugin_name, status
        )),
        UpdateError::Network(_) | UpdateError::InvalidUrl(_) => sink.severe(&format!(
            "[{}] Exception occurred while checking for a new version: {}",
            plugin_name,
            error_chain(error)
        )),
    }
}

/// Joins an error with each of its causes, skipping causes whose text is
/// already part of the message.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::sink::MockLogSink;
    use crate::update::source::MockReleaseSource;
    use crate::update::types::ReleaseInfo;
    use rstest::rstest;

    const ENDPOINT: &str = "https://api.github.com/repos/owner/plugin/releases/latest";

    fn source_returning(tag: Option<&'static str>) -> MockReleaseSource {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .times(1)
            .returning(move |_| {
                Ok(ReleaseInfo {
                    tag_name: tag.map(str::to_string),
                })
            });
        source
    }

    #[rstest]
    #[case::same("2.0.0", Some("v2.0.0"), ComparisonResult::UpToDate)]
    #[case::upper_case_tag("2.0.0", Some("V2.0.0"), ComparisonResult::UpToDate)]
    #[case::upper_case_suffix("2.0.0-RC1", Some("v2.0.0-rc1"), ComparisonResult::UpToDate)]
    #[case::missing_tag("2.0.0", None, ComparisonResult::Indeterminate)]
    fn compare_versions_without_update(
        #[case] current: &str,
        #[case] latest: Option<&str>,
        #[case] expected: ComparisonResult,
    ) {
        assert_eq!(compare_versions(current, latest, ENDPOINT), expected);
    }

    #[rstest]
    #[case::newer("2.0.0", "v3.0.0")]
    #[case::older("3.0.0", "v2.0.0")]
    #[case::equivalent_but_different_text("1.0", "v1.0.0")]
    #[case::tag_without_prefix("2.0.0", "2.0.0")]
    fn compare_versions_reports_any_difference_as_update(#[case] current: &str, #[case] latest: &str) {
        let result = compare_versions(current, Some(latest), ENDPOINT);

        assert_eq!(
            result,
            ComparisonResult::UpdateAvailable {
                latest: latest.to_string(),
                current: format!("v{}", current),
                download_url: "https://github.com/owner/plugin/releases/latest".to_string(),
            }
        );
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[derive(Debug, thiserror::Error)]
    #[error("tcp connect error")]
    struct Connect(#[source] Refused);

    #[derive(Debug, thiserror::Error)]
    #[error("error sending request: {0}")]
    struct SendRequest(#[source] Connect);

    #[test]
    fn error_chain_appends_each_cause_once() {
        assert_eq!(
            error_chain(&SendRequest(Connect(Refused))),
            "error sending request: tcp connect error: connection refused"
        );
        assert_eq!(error_chain(&Refused), "connection refused");
    }

    #[test]
    fn download_link_keeps_unknown_hosts() {
        assert_eq!(
            download_link("https://example.com/releases/latest"),
            "https://example.com/releases/latest"
        );
    }

    #[tokio::test]
    async fn check_passes_endpoint_to_source() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .withf(|endpoint| endpoint == ENDPOINT)
            .times(1)
            .returning(|_| Ok(ReleaseInfo::new("v1.0.0")));
        let checker = UpdateChecker::with_source(source);

        let result = checker
            .check(&VersionQuery::new("Demo", "1.0.0", ENDPOINT))
            .await
            .unwrap();

        assert_eq!(result, ComparisonResult::UpToDate);
    }

    #[tokio::test]
    async fn check_propagates_source_errors() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .returning(|_| Err(UpdateError::UnexpectedStatus(502)));
        let checker = UpdateChecker::with_source(source);

        let result = checker
            .check(&VersionQuery::new("Demo", "1.0.0", ENDPOINT))
            .await;

        assert!(matches!(result, Err(UpdateError::UnexpectedStatus(502))));
    }

    #[tokio::test]
    async fn check_for_updates_reports_latest_version() {
        let checker = UpdateChecker::with_source(source_returning(Some("v2.0.0")));
        let mut sink = MockLogSink::new();
        sink.expect_info()
            .withf(|m| m == "[Demo] You are running the latest version.")
            .times(1)
            .return_const(());

        checker
            .check_for_updates("Demo", "2.0.0", ENDPOINT, &sink)
            .await;
    }

    #[tokio::test]
    async fn check_for_updates_reports_new_version_and_download_link() {
        let checker = UpdateChecker::with_source(source_returning(Some("v3.0.0")));
        let mut sink = MockLogSink::new();
        let mut seq = mockall::Sequence::new();
        sink.expect_info()
            .withf(|m| m == "[Demo] New v3.0.0 available, you are running an OUTDATED v2.0.0!")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_info()
            .withf(|m| {
                m == "[Demo] Download the latest version from: https://github.com/owner/plugin/releases/latest"
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        checker
            .check_for_updates("Demo", "2.0.0", ENDPOINT, &sink)
            .await;
    }

    #[tokio::test]
    async fn check_for_updates_warns_when_tag_is_missing() {
        let checker = UpdateChecker::with_source(source_returning(None));
        let mut sink = MockLogSink::new();
        sink.expect_warn()
            .withf(|m| m == "[Demo] Could not determine the latest version.")
            .times(1)
            .return_const(());

        checker
            .check_for_updates("Demo", "2.0.0", ENDPOINT, &sink)
            .await;
    }

    #[rstest]
    #[case(403)]
    #[case(429)]
    #[tokio::test]
    async fn check_for_updates_warns_when_rate_limited(#[case] status: u16) {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .returning(move |_| Err(UpdateError::RateLimited { status }));
        let checker = UpdateChecker::with_source(source);
        let mut sink = MockLogSink::new();
        sink.expect_warn()
            .withf(|m| {
                m == "[Demo] Rate limited, can't check for a new plugin version. This should resolve itself within an hour."
            })
            .times(1)
            .return_const(());

        checker
            .check_for_updates("Demo", "2.0.0", ENDPOINT, &sink)
            .await;
    }

    #[tokio::test]
    async fn check_for_updates_warns_on_unexpected_status() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .returning(|_| Err(UpdateError::UnexpectedStatus(500)));
        let checker = UpdateChecker::with_source(source);
        let mut sink = MockLogSink::new();
        sink.expect_warn()
            .withf(|m| {
                m == "[Demo] Unexpected response code: 500. Unable to check for a new plugin version."
            })
            .times(1)
            .return_const(());

        checker
            .check_for_updates("Demo", "2.0.0", ENDPOINT, &sink)
            .await;
    }

    #[tokio::test]
    async fn check_for_updates_reports_invalid_url_as_severe() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .returning(|_| Err(UpdateError::InvalidUrl("nope".to_string())));
        let checker = UpdateChecker::with_source(source);
        let mut sink = MockLogSink::new();
        sink.expect_severe()
            .withf(|m| {
                m == "[Demo] Exception occurred while checking for a new version: Invalid release URL: nope"
            })
            .times(1)
            .return_const(());

        checker.check_for_updates("Demo", "2.0.0", "nope", &sink).await;
    }
}
