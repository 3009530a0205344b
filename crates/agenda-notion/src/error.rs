//! Gateway error types.

use agenda_config::ConfigError;
use agenda_core::CoreError;
use thiserror::Error;

/// Errors that can occur while reading or writing entries.
#[derive(Debug, Error)]
pub enum NotionError {
    /// Entity validation failed or an operation is missing a required field.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database id or credential is not configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database or page does not exist (or is not shared with the integration).
    #[error("not found ({code}): {message}")]
    NotFound {
        /// Provider error code, usually `object_not_found`.
        code: String,
        /// Provider error message.
        message: String,
    },

    /// Any other non-success response.
    #[error("Notion API error ({status} {code}): {message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Provider error code (e.g. `validation_error`, `rate_limited`).
        code: String,
        /// Provider error message or raw response body.
        message: String,
        /// Parsed `Retry-After` for 429 responses. Nothing retries on it.
        retry_after_secs: Option<u64>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}
