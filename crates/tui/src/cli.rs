//! Command-line argument parsing for sources-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Environment variable and `.env` resolution (see `sources_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for sources-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-path, --account)
/// 2. Environment variables (e.g., SOURCES_BASE_PATH, FAKE_IDENTITY)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "sources-tui",
    about = "Terminal user interface for the Sources inventory API",
    version,
    after_help = "Examples:\n  sources-tui\n  sources-tui --base-path http://localhost:3000\n  sources-tui --account 540155\n  sources-tui --log-dir /var/log/sources-tui\n"
)]
pub struct Cli {
    /// Base path of the Sources API service
    #[arg(long)]
    pub base_path: Option<String>,

    /// Account number used for the development identity header
    #[arg(long)]
    pub account: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub skip_verify: bool,
}
