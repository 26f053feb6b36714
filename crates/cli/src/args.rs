//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "sources-cli")]
#[command(about = "Sources CLI - Manage provider connections from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  sources-cli sources list\n  sources-cli sources list --source-type amazon --output json\n  sources-cli sources show 750\n  sources-cli sources add --name 'AWS production' --source-type amazon --url https://ec2.us-east-1.amazonaws.com --role aws\n  sources-cli sources remove 750 --force\n  sources-cli source-types\n  sources-cli --account 540155 endpoints --source-ids 750,751\n"
)]
pub struct Cli {
    /// Base path of the Sources API service (e.g., https://cloud.example.com/api)
    #[arg(short, long, global = true, env = "SOURCES_BASE_PATH")]
    pub base_path: Option<String>,

    /// Account number encoded into the development identity header
    #[arg(short, long, global = true, env = "FAKE_IDENTITY")]
    pub account: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, global = true, env = "SOURCES_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "SOURCES_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage sources and their linked records
    Sources {
        #[command(subcommand)]
        command: commands::sources::SourcesCommand,
    },

    /// List the source type catalog
    SourceTypes,

    /// List the application type catalog
    ApplicationTypes,

    /// List applications attached to sources
    Applications {
        /// Restrict to applications belonging to these source ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        source_ids: Vec<String>,
    },

    /// List endpoints across sources
    Endpoints {
        /// Restrict to endpoints belonging to these source ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        source_ids: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sources::SourcesCommand;

    #[test]
    fn test_global_flags_parse_before_subcommand() {
        let cli = Cli::parse_from([
            "sources-cli",
            "--base-path",
            "http://localhost:3000/api",
            "--account",
            "540155",
            "source-types",
        ]);
        assert_eq!(cli.base_path.as_deref(), Some("http://localhost:3000/api"));
        assert_eq!(cli.account.as_deref(), Some("540155"));
        assert!(matches!(cli.command, Commands::SourceTypes));
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["sources-cli", "sources", "list", "--output", "json"]);
        assert_eq!(cli.output, "json");
    }

    #[test]
    fn test_output_defaults_to_table() {
        let cli = Cli::parse_from(["sources-cli", "source-types"]);
        assert_eq!(cli.output, "table");
    }

    #[test]
    fn test_sources_show_takes_positional_id() {
        let cli = Cli::parse_from(["sources-cli", "sources", "show", "750"]);
        match cli.command {
            Commands::Sources {
                command: SourcesCommand::Show { id },
            } => assert_eq!(id, "750"),
            _ => panic!("expected sources show"),
        }
    }

    #[test]
    fn test_endpoints_source_ids_are_comma_split() {
        let cli = Cli::parse_from(["sources-cli", "endpoints", "--source-ids", "750,751"]);
        match cli.command {
            Commands::Endpoints { source_ids } => {
                assert_eq!(source_ids, vec!["750".to_string(), "751".to_string()]);
            }
            _ => panic!("expected endpoints"),
        }
    }
}
