//! Sources client creation.
//!
//! Responsibilities:
//! - Create `SourcesClient` instances from loaded configuration.
//!
//! Does NOT handle:
//! - Configuration loading (see `sources_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants / Assumptions:
//! - The provided config has a valid base path and identity settings.
//! - The identity header is encoded once at build time; no login round
//!   trip is required before the first request.

use anyhow::Result;
use sources_client::SourcesClient;
use sources_config::Config;

/// Create a new Sources client from resolved configuration.
///
/// Delegates to the builder in the client crate so the CLI and TUI share
/// one construction path.
///
/// # Errors
///
/// Returns an error if the API base is missing or the underlying HTTP
/// client cannot be constructed.
pub fn create_client(config: &Config) -> Result<SourcesClient> {
    SourcesClient::builder()
        .from_config(config)
        .build()
        .map_err(|e| e.into())
}
