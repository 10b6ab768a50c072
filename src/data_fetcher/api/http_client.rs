//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client whose every request is bounded by `timeout_seconds`.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
///
/// # Features
/// * Whole-request timeout (connect, send and body), default 10 seconds
/// * Small idle connection pool, since requests are issued one at a time
/// * User agent naming this crate and its version
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
