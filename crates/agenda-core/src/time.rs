//! Timestamp parsing and formatting.
//!
//! The remote service returns RFC 3339 strings with milliseconds
//! (`2024-01-01T10:00:00.000+00:00`) or bare dates for all-day ranges. The CLI
//! additionally accepts naive date-times, which are read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

use crate::errors::CoreError;

/// Timestamp type used for entry start/end.
pub type Timestamp = DateTime<FixedOffset>;

/// Parse an RFC 3339 timestamp, a naive date-time (UTC), or a bare date
/// (midnight UTC).
///
/// # Errors
///
/// Returns [`CoreError::Validation`] on `field` when none of the formats match.
pub fn parse_timestamp(raw: &str, field: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts);
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    Err(CoreError::validation(
        field,
        format!("'{raw}' is not an ISO-8601 date or date-time"),
    ))
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] on `field` for any other format.
pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::validation(field, format!("'{raw}' is not YYYY-MM-DD: {e}")))
}

/// Format a timestamp as ISO-8601 with its offset (`2024-01-01T10:00:00+00:00`).
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
