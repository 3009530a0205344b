use agenda_core::time::parse_date;
use agenda_core::{DatabaseRef, Entry, Status};
use agenda_notion::EntryGateway;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::output;

/// Handle `agenda list`.
pub async fn handle(
    args: &ListArgs,
    gateway: &EntryGateway,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let entries = run(args, gateway).await?;
    output(&entries, flags.format)
}

pub async fn run(args: &ListArgs, gateway: &EntryGateway) -> anyhow::Result<Vec<Entry>> {
    let database: DatabaseRef = args.database.parse()?;
    let status: Status = args.status.parse()?;
    let since = args
        .since
        .as_deref()
        .map(|raw| parse_date(raw, "since"))
        .transpose()?;

    Ok(gateway.list(database, status, since).await?)
}
