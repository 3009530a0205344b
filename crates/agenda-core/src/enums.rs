//! Closed enumerations for the addressable databases and entry statuses.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The labels the remote service expects are exposed separately through
//! `wire_label()` so local JSON output stays stable if a label is renamed
//! remotely.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DatabaseRef
// ---------------------------------------------------------------------------

/// One of the fixed remote collections an entry can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseRef {
    University,
    Work,
    Personal,
}

impl DatabaseRef {
    pub const ALL: [Self; 3] = [Self::University, Self::Work, Self::Personal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Work => "Work",
            Self::Personal => "Personal",
        }
    }
}

impl fmt::Display for DatabaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseRef {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|db| db.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                CoreError::validation(
                    "database",
                    format!("'{raw}' is not one of University, Work, Personal"),
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of an entry.
///
/// ```text
/// not_started → in_progress → done
/// ```
///
/// No transition rules are enforced; the remote service accepts any label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Label of the status option in the remote database.
    #[must_use]
    pub const fn wire_label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    /// Parse a remote status label. Only exact labels are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for any other label.
    pub fn from_wire_label(label: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|status| status.wire_label() == label)
            .ok_or_else(|| unknown_status(label))
    }
}

fn unknown_status(raw: &str) -> CoreError {
    CoreError::validation(
        "status",
        format!("'{raw}' is not one of Not started, In progress, Done"),
    )
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_label())
    }
}

/// Accepts the remote label or the identifier form, ignoring case and
/// separators, so `"Not started"`, `not_started`, `not-started`, and
/// `NotStarted` all parse. Matches [`DatabaseRef`]'s case-insensitive parsing.
impl FromStr for Status {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = squash(raw);
        Self::ALL
            .into_iter()
            .find(|status| squash(status.as_str()) == key)
            .ok_or_else(|| unknown_status(raw))
    }
}

/// Lowercase with `_`, `-`, and spaces removed.
fn squash(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !matches!(ch, '_' | '-' | ' '))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
