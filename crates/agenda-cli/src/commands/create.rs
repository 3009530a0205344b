use agenda_core::DatabaseRef;
use agenda_notion::EntryGateway;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::entry_from_fields;
use crate::output::output;

/// Handle `agenda create`.
pub async fn handle(
    args: &CreateArgs,
    gateway: &EntryGateway,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let database: DatabaseRef = args.database.parse()?;
    let entry = entry_from_fields(&args.fields)?;

    let created = gateway.create(database, &entry).await?;
    output(&created, flags.format)
}
