//! Source trait for fetching the latest published release

#[cfg(test)]
use mockall::automock;

use crate::update::error::UpdateError;
use crate::update::types::ReleaseInfo;

/// Trait for fetching release metadata from a remote endpoint
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest release published at `release_endpoint`
    ///
    /// # Returns
    /// * `Ok(ReleaseInfo)` - Parsed release; `tag_name` is `None` when the
    ///   body carries no usable tag
    /// * `Err(UpdateError)` - Non-200 status, bad URL or transport failure
    async fn fetch_latest_release(&self, release_endpoint: &str)
    -> Result<ReleaseInfo, UpdateError>;
}
