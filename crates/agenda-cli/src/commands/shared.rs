use agenda_core::time::parse_timestamp;
use agenda_core::{Entry, Status};

use crate::cli::root_commands::EntryFields;

/// Build an unsaved entry from the create/update flags.
pub fn entry_from_fields(fields: &EntryFields) -> anyhow::Result<Entry> {
    let status: Status = fields.status.parse()?;
    let start = parse_timestamp(&fields.start, "start")?;
    let end = parse_timestamp(&fields.end, "end")?;
    Ok(Entry::new(fields.title.as_str(), status)?.with_range(start, end)?)
}
