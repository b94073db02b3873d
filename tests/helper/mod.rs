//! Shared test utilities

#![allow(dead_code)]

pub mod sink;

pub use sink::{Level, RecordingSink};

/// Path mocked as the "latest release" endpoint
pub const LATEST_PATH: &str = "/repos/owner/demo/releases/latest";

/// Builds the endpoint URL for a mockito server
pub fn latest_url(server: &mockito::Server) -> String {
    format!("{}{}", server.url(), LATEST_PATH)
}

/// Mocks the latest-release endpoint with the given status and body
pub async fn mock_latest_release(
    server: &mut mockito::Server,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("GET", LATEST_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
