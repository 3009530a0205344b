//! Notion wire shapes for the three properties of the local schema.
//!
//! The same structs are used for responses and request payloads. Fields the
//! API only sends (`plain_text`) or only accepts (`text`) are optional and
//! skipped when absent, and unknown properties in responses are ignored.

use serde::{Deserialize, Serialize};

/// Property holding the entry title.
pub const TITLE_PROPERTY: &str = "Name";
/// Property holding the entry status.
pub const STATUS_PROPERTY: &str = "Status";
/// Property holding the entry date range.
pub const DATE_PROPERTY: &str = "Date";

/// One page (row) as returned by query, create, and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "Name", default)]
    pub name: TitleProperty,
    #[serde(rename = "Status", default)]
    pub status: StatusProperty,
    #[serde(rename = "Date", default)]
    pub date: DateProperty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleProperty {
    #[serde(default)]
    pub title: Vec<RichText>,
}

/// A rich-text span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
}

impl RichText {
    /// A request span carrying `content`.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            plain_text: None,
            text: Some(TextContent {
                content: content.into(),
            }),
        }
    }

    /// Plain text of the span, preferring the response-side `plain_text`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.plain_text
            .as_deref()
            .or_else(|| self.text.as_ref().map(|t| t.content.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusProperty {
    #[serde(default)]
    pub status: Option<NamedOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateProperty {
    #[serde(default)]
    pub date: Option<DateRange>,
}

/// ISO-8601 start/end pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// Response of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<RawPage>,
    #[serde(default)]
    pub has_more: bool,
}

/// Body of a non-success response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
