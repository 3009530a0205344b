use clap::{Parser, ValueEnum};

pub mod root_commands;

pub use root_commands::Commands;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns, entry fields first.
    Table,
    /// Single-line JSON.
    Raw,
}

/// Flags the handlers and output layer need after parsing.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Top-level CLI parser for the `agenda` binary.
#[derive(Debug, Parser)]
#[command(
    name = "agenda",
    version,
    about = "agenda - schedule entries in Notion databases"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "agenda",
            "--format",
            "table",
            "--verbose",
            "delete",
            "page-1",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Delete { ref id } if id == "page-1"));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["agenda", "delete", "page-1", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.global_flags().quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["agenda", "--format", "xml", "delete", "page-1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_parses_optional_since() {
        let cli = Cli::try_parse_from([
            "agenda",
            "list",
            "--database",
            "personal",
            "--status",
            "not_started",
            "--since",
            "2024-06-01",
        ])
        .expect("cli should parse");

        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.database, "personal");
        assert_eq!(args.since.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn create_requires_full_range() {
        let parsed = Cli::try_parse_from([
            "agenda",
            "create",
            "--database",
            "work",
            "--title",
            "Review",
            "--status",
            "done",
            "--start",
            "2024-01-01T10:00:00",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn update_takes_id_and_fields() {
        let cli = Cli::try_parse_from([
            "agenda",
            "update",
            "page-1",
            "--title",
            "Review",
            "--status",
            "In progress",
            "--start",
            "2024-01-01T10:00:00",
            "--end",
            "2024-01-01T11:00:00",
        ])
        .expect("cli should parse");

        let Commands::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.id, "page-1");
        assert_eq!(args.fields.status, "In progress");
    }

    #[test]
    fn demo_title_has_default() {
        let cli = Cli::try_parse_from(["agenda", "demo"]).expect("cli should parse");
        let Commands::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.title, "Cuddling time");
    }
}
