use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `crumb` binary.
#[derive(Debug, Parser)]
#[command(name = "crumb", version, about = "Crumb - bakery CRM task dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows for list commands (defaults from config)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "crumb",
            "--format",
            "json",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["crumb", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["crumb", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn task_status_command_parses_positional_args() {
        let cli = Cli::try_parse_from(["crumb", "task", "status", "t1", "completed"])
            .expect("cli should parse");
        let Commands::Task { action } = cli.command else {
            panic!("expected task command");
        };
        let super::subcommands::TaskCommands::Status(args) = action else {
            panic!("expected status subcommand");
        };
        assert_eq!(args.id, "t1");
        assert_eq!(args.status, "completed");
    }

    #[test]
    fn login_requires_email_and_password() {
        assert!(Cli::try_parse_from(["crumb", "auth", "login"]).is_err());
        let cli = Cli::try_parse_from([
            "crumb", "auth", "login", "--email", "a@b.c", "--password", "secret",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Auth { .. }));
    }
}
