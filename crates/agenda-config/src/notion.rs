//! Notion API connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_version() -> String {
    "2022-06-28".to_string()
}

/// Default request timeout.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Integration token (`secret_…` / `ntn_…`).
    #[serde(default)]
    pub token: String,

    /// API root; overridden in tests to point at a mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header.
    #[serde(default = "default_notion_version")]
    pub notion_version: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
            notion_version: default_notion_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NotionConfig {
    /// Check if an integration token is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Validate the fields needed to build an API client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without a token and
    /// [`ConfigError::InvalidValue`] for a non-HTTP base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "notion".to_string(),
            });
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "notion.base_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notion.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = NotionConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://api.notion.com/v1");
        assert_eq!(config.notion_version, "2022-06-28");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn configured_when_token_set() {
        let config = NotionConfig {
            token: "secret_abc".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = NotionConfig {
            token: "secret_abc".into(),
            base_url: "api.notion.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "notion.base_url"
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = NotionConfig {
            token: "secret_abc".into(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
