//! Update checking for published plugin releases
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌───────────────┐     ┌───────────────┐
//! │ ReleaseSource │────▶│ UpdateChecker │────▶│    LogSink    │
//! │   (fetch)     │     │   (compare)   │     │   (report)    │
//! └───────────────┘     └───────────────┘     └───────────────┘
//!         │
//!         ▼
//! ┌───────────────┐
//! │    GitHub     │
//! │ releases API  │
//! └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Version comparison and reporting
//! - [`source`]: Trait for fetching the latest release from a remote endpoint
//! - [`github`]: GitHub "latest release" API implementation
//! - [`types`]: `VersionQuery`, `ReleaseInfo`, `ComparisonResult`
//! - [`error`]: Error taxonomy for a single check

pub mod checker;
pub mod error;
pub mod github;
pub mod source;
pub mod types;

pub use checker::{UpdateChecker, check_for_updates};
pub use error::UpdateError;
pub use github::GitHubReleaseSource;
pub use source::ReleaseSource;
pub use types::{ComparisonResult, ReleaseInfo, VersionQuery};
