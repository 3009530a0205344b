use clap::{Args, Subcommand};

/// All top-level `agenda` commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List entries in a database with a given status.
    List(ListArgs),
    /// Create an entry in a database.
    Create(CreateArgs),
    /// Overwrite the title, status, and date range of an entry.
    Update(UpdateArgs),
    /// Archive an entry.
    Delete {
        /// Remote page id.
        id: String,
    },
    /// Create, list, complete, and archive a sample entry in Personal.
    Demo(DemoArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// University, Work, or Personal.
    #[arg(long)]
    pub database: String,
    /// not_started, in_progress, or done.
    #[arg(long)]
    pub status: String,
    /// Only entries starting on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub database: String,
    #[command(flatten)]
    pub fields: EntryFields,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: EntryFields,
}

/// Fields written on create and update.
#[derive(Clone, Debug, Args)]
pub struct EntryFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub status: String,
    /// ISO-8601 date-time; naive values are read as UTC.
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
}

#[derive(Clone, Debug, Args)]
pub struct DemoArgs {
    #[arg(long, default_value = "Cuddling time")]
    pub title: String,
}
