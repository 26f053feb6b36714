//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Pass resolved configuration and output options to each command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.

use anyhow::Result;
use sources_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
///
/// Routes the parsed CLI arguments to the appropriate command module based
/// on the subcommand variant. Every command receives the resolved
/// configuration plus the global output options.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Sources { command } => {
            commands::sources::run(config, command, &cli.output, cli.output_file.clone()).await?;
        }
        Commands::SourceTypes => {
            commands::source_types::run(config, &cli.output, cli.output_file.clone()).await?;
        }
        Commands::ApplicationTypes => {
            commands::application_types::run(config, &cli.output, cli.output_file.clone()).await?;
        }
        Commands::Applications { source_ids } => {
            commands::applications::run(config, source_ids, &cli.output, cli.output_file.clone())
                .await?;
        }
        Commands::Endpoints { source_ids } => {
            commands::endpoints::run(config, source_ids, &cli.output, cli.output_file.clone())
                .await?;
        }
    }

    Ok(())
}
