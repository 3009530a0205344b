use agenda_notion::EntryGateway;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::entry_from_fields;
use crate::output::output;

/// Handle `agenda update`. All fields are overwritten.
pub async fn handle(
    args: &UpdateArgs,
    gateway: &EntryGateway,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut entry = entry_from_fields(&args.fields)?;
    entry.id = Some(args.id.trim().to_string()).filter(|id| !id.is_empty());

    gateway.update(&entry).await?;
    output(&entry, flags.format)
}
