//! Sources CLI - Command-line interface for the Sources inventory API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute Sources REST API commands via the shared client library.
//! - Format and display results in various output formats (table, JSON, CSV).
//!
//! Does NOT handle:
//! - Core business logic or REST API implementation (see `crates/client`).
//! - Interactive terminal UI (see `crates/tui`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Global options (like `--base-path`) are applied consistently across all subcommands.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod interactive;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use sources_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let mut loader = ConfigLoader::new();
    loader.set_base_path(cli.base_path.clone());
    loader.set_account_number(cli.account.clone());
    loader.set_timeout(cli.timeout.map(std::time::Duration::from_secs));
    if cli.skip_verify {
        loader.set_skip_verify(Some(true));
    }

    let config = match loader.load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if let Err(e) = run_command(cli, config).await {
        eprintln!("{:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}
