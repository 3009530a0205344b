use agenda_notion::EntryGateway;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    archived: bool,
}

/// Handle `agenda delete`.
pub async fn handle(id: &str, gateway: &EntryGateway, flags: &GlobalFlags) -> anyhow::Result<()> {
    gateway.delete(id).await?;
    output(
        &DeleteResponse {
            id: id.trim(),
            archived: true,
        },
        flags.format,
    )
}
