//! Conversion between Notion pages and [`Entry`] values.

use agenda_core::entities::MISSING_TEXT;
use agenda_core::time::{format_timestamp, parse_timestamp};
use agenda_core::{CoreError, Entry, Status};

use crate::wire::{
    DateProperty, DateRange, NamedOption, Properties, RawPage, RichText, StatusProperty,
    TitleProperty,
};

/// Build an [`Entry`] from a page returned by the API.
///
/// An empty title becomes `"N/A"` and a missing status becomes `None`: pages
/// being edited in the Notion UI can be returned in that state. A date range
/// with no `end` yields an entry with only `start` set.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for an unknown status label or a date
/// string that is not ISO-8601.
pub fn from_wire(page: RawPage) -> Result<Entry, CoreError> {
    let RawPage {
        id, url, properties, ..
    } = page;

    let title = properties
        .name
        .title
        .first()
        .and_then(RichText::text)
        .unwrap_or(MISSING_TEXT)
        .to_string();

    let status = properties
        .status
        .status
        .map(|option| Status::from_wire_label(&option.name))
        .transpose()?;

    let (start, end) = match properties.date.date {
        Some(range) => (
            Some(parse_timestamp(&range.start, "start")?),
            range
                .end
                .as_deref()
                .map(|end| parse_timestamp(end, "end"))
                .transpose()?,
        ),
        None => (None, None),
    };

    Ok(Entry {
        id: Some(id),
        title,
        status,
        start,
        end,
        url: (!url.is_empty()).then_some(url),
    })
}

/// Build the property payload for a create or update `operation`.
///
/// # Errors
///
/// Returns [`CoreError::MissingField`] if the status, start, or end is unset.
pub fn to_wire(entry: &Entry, operation: &str) -> Result<Properties, CoreError> {
    let status = entry.require_status(operation)?;
    let (start, end) = entry.require_range(operation)?;

    Ok(Properties {
        name: TitleProperty {
            title: vec![RichText::content(entry.title.clone())],
        },
        status: StatusProperty {
            status: Some(NamedOption {
                name: status.wire_label().to_string(),
            }),
        },
        date: DateProperty {
            date: Some(DateRange {
                start: format_timestamp(&start),
                end: Some(format_timestamp(&end)),
            }),
        },
    })
}
