use serde::Deserialize;
use tracing::debug;

/// A single update-check request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionQuery {
    /// Display label used in log lines
    pub plugin_name: String,
    /// Current version, without a leading `v`
    pub current_version: String,
    /// "Latest release" API URL
    pub release_endpoint: String,
}

impl VersionQuery {
    pub fn new(plugin_name: &str, current_version: &str, release_endpoint: &str) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
            current_version: current_version.to_string(),
            release_endpoint: release_endpoint.to_string(),
        }
    }
}

/// Subset of a GitHub release response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    #[serde(default)]
    pub tag_name: Option<String>,
}

impl ReleaseInfo {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: Some(tag_name.to_string()),
        }
    }

    /// Parses a response body. Anything that does not decode to an object with
    /// a non-empty string `tag_name` yields a release without a tag.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ReleaseInfo>(body) {
            Ok(release) => Self {
                tag_name: release.tag_name.filter(|tag| !tag.is_empty()),
            },
            Err(e) => {
                debug!("Release body did not decode: {}", e);
                Self::default()
            }
        }
    }
}

/// Outcome of comparing the current version against the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonResult {
    /// The current version matches the latest tag
    UpToDate,
    /// A different tag is published
    UpdateAvailable {
        /// Tag of the latest release
        latest: String,
        /// Current version as compared, including the `v` prefix
        current: String,
        /// Web page of the release
        download_url: String,
    },
    /// The latest tag could not be determined
    Indeterminate,
}
