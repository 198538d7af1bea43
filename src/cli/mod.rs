//! Command-line interface.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Issue-tracker polling and chat notification adapters for a CI
/// orchestrator.
#[derive(Debug, Parser)]
#[command(name = "conveyor", version, about)]
pub struct Cli {
    /// Path to the configuration file (defaults to conveyor.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and print the effective configuration.
    CheckConfig,
    /// Run a single poll tick and print the emitted changes.
    Poll,
    /// Post a chat notification for a finished build.
    Notify(NotifyArgs),
    /// Run the poll loop against the host until interrupted.
    Run,
}

/// Arguments for `conveyor notify`.
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Host build id to notify about.
    pub build_id: u64,
}

/// Print an error and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_notify() {
        let cli = Cli::parse_from(["conveyor", "notify", "42"]);
        match cli.command {
            Commands::Notify(args) => assert_eq!(args.build_id, 42),
            other => panic!("Expected Notify, got: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["conveyor", "--json", "--config", "/tmp/c.yaml", "poll"]);
        assert!(cli.json);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.yaml")));
        assert!(matches!(cli.command, Commands::Poll));
    }
}
