//! `agenda demo`: one full pass over the Personal database.
//!
//! Creates a not-started entry for tomorrow 10:00-11:00 (local time), lists
//! not-started entries from tomorrow on, finds the new entry by title, marks
//! it done, and archives it.

use anyhow::{Context, bail};
use chrono::{DateTime, Duration, FixedOffset, Local};
use serde::Serialize;

use agenda_core::time::Timestamp;
use agenda_core::{DatabaseRef, Entry, Status};
use agenda_notion::EntryGateway;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DemoArgs;
use crate::output::output;

const DEMO_DATABASE: DatabaseRef = DatabaseRef::Personal;

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub created: Entry,
    /// Not-started entries returned by the list step.
    pub listed: usize,
    pub completed: Entry,
    pub archived_id: String,
}

/// Handle `agenda demo`.
pub async fn handle(
    args: &DemoArgs,
    gateway: &EntryGateway,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = run(&args.title, gateway, Local::now().fixed_offset()).await?;
    output(&report, flags.format)
}

pub async fn run(
    title: &str,
    gateway: &EntryGateway,
    now: DateTime<FixedOffset>,
) -> anyhow::Result<DemoReport> {
    let (start, end) = tomorrow_slot(now).context("cannot schedule the demo entry tomorrow")?;

    let entry = Entry::new(title, Status::NotStarted)?.with_range(start, end)?;
    let created = gateway.create(DEMO_DATABASE, &entry).await?;
    tracing::info!(entry = %created, "demo entry created");

    let listed = gateway
        .list(DEMO_DATABASE, Status::NotStarted, Some(start.date_naive()))
        .await?;
    let listed_count = listed.len();
    for entry in &listed {
        tracing::debug!(%entry, "listed");
    }

    let Some(mut found) = listed.into_iter().find(|entry| entry.title == title) else {
        bail!("no entry found with the title '{title}'");
    };

    found.status = Some(Status::Done);
    gateway.update(&found).await?;

    let archived_id = found.require_id("delete")?.to_string();
    gateway.delete(&archived_id).await?;

    Ok(DemoReport {
        created,
        listed: listed_count,
        completed: found,
        archived_id,
    })
}

/// Tomorrow 10:00-11:00 in the offset of `now`.
fn tomorrow_slot(now: DateTime<FixedOffset>) -> Option<(Timestamp, Timestamp)> {
    let start = now
        .date_naive()
        .succ_opt()?
        .and_hms_opt(10, 0, 0)?
        .and_local_timezone(*now.offset())
        .single()?;
    Some((start, start + Duration::hours(1)))
}
