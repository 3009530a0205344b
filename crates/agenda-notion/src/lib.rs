//! # agenda-notion
//!
//! Notion API client and entry gateway for agenda.
//!
//! - [`wire`]: page and property shapes exchanged with the API
//! - [`translate`]: page ⇄ [`Entry`](agenda_core::Entry) conversion
//! - [`query`]: filter expressions and mutation payloads
//! - [`NotionClient`]: one HTTP client per process, shared by all calls
//! - [`EntryGateway`]: list / create / update / delete over a configured directory

pub mod databases;
pub mod gateway;
pub mod pages;
pub mod query;
pub mod translate;
pub mod wire;

mod error;
mod http;

pub use error::NotionError;
pub use gateway::EntryGateway;

use std::time::Duration;

use agenda_config::{ConfigError, NotionConfig};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

const NOTION_VERSION_HEADER: &str = "notion-version";

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Notion REST API.
///
/// Auth and version headers are set once as default headers; endpoint methods
/// live in [`databases`] and [`pages`].
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotionClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Config`] when the token is missing or a header
    /// value is not valid, and [`NotionError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        config.validate()?;

        let mut auth = header_value("notion.token", &format!("Bearer {}", config.token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static(NOTION_VERSION_HEADER),
            header_value("notion.notion_version", &config.notion_version)?,
        );

        let http = reqwest::Client::builder()
            .user_agent(concat!("agenda/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path such as `pages/{id}`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str) -> NotionConfig {
        NotionConfig {
            token: token.to_string(),
            base_url: "http://127.0.0.1:1/v1/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn client_requires_token() {
        let err = NotionClient::new(&config("")).unwrap_err();
        assert!(matches!(
            err,
            NotionError::Config(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn client_rejects_unprintable_token() {
        let err = NotionClient::new(&config("secret\nabc")).unwrap_err();
        assert!(matches!(
            err,
            NotionError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = NotionClient::new(&config("secret_abc")).unwrap();
        assert_eq!(client.endpoint("pages"), "http://127.0.0.1:1/v1/pages");
    }
}
