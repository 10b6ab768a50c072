//! Generic HTTP fetching with status and body classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Issues a single GET request and deserializes the JSON body.
///
/// This function:
/// - Makes exactly one attempt; there is no retry and no response cache
/// - Maps transport failures to `NetworkTimeout` / `NetworkConnection`
/// - Maps non-success statuses to the matching status error
/// - Separates empty bodies, non-JSON bodies and unexpected JSON structure
///
/// # Arguments
/// * `client` - HTTP client for making requests (carries the timeout)
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(classify_request_error(e, url));
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(classify_request_error(e, url));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    parse_body(&response_text, url)
}

fn classify_request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Deserializes a response body, telling apart an empty body, a body that
/// is not JSON at all and JSON that does not match `T`.
pub(super) fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else if e.is_syntax() || e.is_eof() {
                Err(AppError::api_malformed_json(e.to_string(), url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
