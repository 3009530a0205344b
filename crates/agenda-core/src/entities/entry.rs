use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Status;
use crate::errors::CoreError;
use crate::time::{Timestamp, format_timestamp};

/// Placeholder shown for a title or status the remote record left empty.
pub const MISSING_TEXT: &str = "N/A";

/// A single schedulable record in one of the remote databases.
///
/// The owning database is not stored on the entry; it is passed alongside it
/// to every operation that needs it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry {
    /// Remote page id. `None` until the entry has been created remotely.
    pub id: Option<String>,
    pub title: String,
    /// `None` only for entries read from a remote record with no status set.
    pub status: Option<Status>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    /// Remote-assigned page URL, read-only.
    pub url: Option<String>,
}

impl Entry {
    /// Build a new, not yet persisted entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `title` is blank.
    pub fn new(title: impl Into<String>, status: Status) -> Result<Self, CoreError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CoreError::validation("title", "title must not be empty"));
        }
        Ok(Self {
            id: None,
            title,
            status: Some(status),
            start: None,
            end: None,
            url: None,
        })
    }

    /// Attach a start/end range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on `end` if it precedes `start`.
    pub fn with_range(mut self, start: Timestamp, end: Timestamp) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::validation(
                "end",
                format!(
                    "end {} is before start {}",
                    format_timestamp(&end),
                    format_timestamp(&start)
                ),
            ));
        }
        self.start = Some(start);
        self.end = Some(end);
        Ok(self)
    }

    /// The remote id, required by `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if the entry was never persisted
    /// or its id is blank.
    pub fn require_id(&self, operation: &str) -> Result<&str, CoreError> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CoreError::missing("id", operation))
    }

    /// The status, required by `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if the status is unset.
    pub fn require_status(&self, operation: &str) -> Result<Status, CoreError> {
        self.status
            .ok_or_else(|| CoreError::missing("status", operation))
    }

    /// The full date range, required by `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] naming `start` or `end`, whichever
    /// is unset first.
    pub fn require_range(&self, operation: &str) -> Result<(Timestamp, Timestamp), CoreError> {
        let start = self
            .start
            .ok_or_else(|| CoreError::missing("start", operation))?;
        let end = self
            .end
            .ok_or_else(|| CoreError::missing("end", operation))?;
        Ok((start, end))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_none(value: Option<String>) -> String {
            value.unwrap_or_else(|| "None".to_string())
        }

        write!(
            f,
            "Entry(id={}, title={}, status={}, start={}, end={}, url={})",
            or_none(self.id.clone()),
            self.title,
            self.status
                .map_or_else(|| MISSING_TEXT.to_string(), |s| s.to_string()),
            or_none(self.start.as_ref().map(format_timestamp)),
            or_none(self.end.as_ref().map(format_timestamp)),
            or_none(self.url.clone()),
        )
    }
}
