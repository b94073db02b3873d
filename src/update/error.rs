use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid release URL: {0}")]
    InvalidUrl(String),

    #[error("Rate limited: status {status}")]
    RateLimited { status: u16 },

    #[error("Unexpected response code: {0}")]
    UnexpectedStatus(u16),
}
