use agenda_notion::EntryGateway;

use crate::cli::{Commands, GlobalFlags};

pub mod create;
pub mod delete;
pub mod demo;
pub mod list;
pub mod shared;
pub mod update;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    gateway: &EntryGateway,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list::handle(&args, gateway, flags).await,
        Commands::Create(args) => create::handle(&args, gateway, flags).await,
        Commands::Update(args) => update::handle(&args, gateway, flags).await,
        Commands::Delete { id } => delete::handle(&id, gateway, flags).await,
        Commands::Demo(args) => demo::handle(&args, gateway, flags).await,
    }
}
