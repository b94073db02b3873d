//! GitHub Releases API release source

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::USER_AGENT;
use crate::update::error::UpdateError;
use crate::update::source::ReleaseSource;
use crate::update::types::ReleaseInfo;

/// Release source for the GitHub "latest release" endpoint
/// (`https://api.github.com/repos/USER/REPO/releases/latest`)
pub struct GitHubReleaseSource {
    client: reqwest::Client,
}

impl GitHubReleaseSource {
    pub fn new() -> Self {
        Self {
            // One request per check: no idle connection outlives it.
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .pool_max_idle_per_host(0)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for GitHubReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn fetch_latest_release(
        &self,
        release_endpoint: &str,
    ) -> Result<ReleaseInfo, UpdateError> {
        let url = reqwest::Url::parse(release_endpoint)
            .map_err(|e| UpdateError::InvalidUrl(format!("{}: {}", release_endpoint, e)))?;

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(UpdateError::RateLimited {
                status: status.as_u16(),
            });
        }

        if status != StatusCode::OK {
            warn!("Release endpoint returned status {}: {}", status, release_endpoint);
            return Err(UpdateError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), release_endpoint);

        Ok(ReleaseInfo::from_body(&body))
    }
}
