//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (404 / `object_not_found` → not found,
//! 429 with `Retry-After` parsing, any other non-success → remote error) so
//! the endpoint modules stay focused on request construction.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::NotionError;
use crate::wire::ErrorBody;

/// Retry hint used when a 429 response has no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. Otherwise the error body
/// (`{"object":"error","code":…,"message":…}`) is decoded, falling back to
/// the raw text when it is not JSON.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, NotionError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let retry_after_secs =
        (status == StatusCode::TOO_MANY_REQUESTS).then(|| parse_retry_after(&resp));
    let body = resp.text().await.unwrap_or_default();
    let ErrorBody { code, message } =
        serde_json::from_str(&body).unwrap_or_else(|_| ErrorBody {
            code: String::new(),
            message: body,
        });

    if status == StatusCode::NOT_FOUND || code == "object_not_found" {
        return Err(NotionError::NotFound { code, message });
    }
    Err(NotionError::Remote {
        status: status.as_u16(),
        code,
        message,
        retry_after_secs,
    })
}

/// Read a successful response body as JSON.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, NotionError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| NotionError::Parse(e.to_string()))
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
