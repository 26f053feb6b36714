//! Shared test utilities for sources-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (account, base path).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `FAKE_IDENTITY` is set to "100010" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `sources-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `FAKE_IDENTITY` is set to a fixed account so the identity header is
///   deterministic.
/// - Other sensitive env vars are cleared to ensure no leakage from the host.
pub fn sources_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sources-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // A fixed account keeps the identity header deterministic
    cmd.env("FAKE_IDENTITY", "100010");

    // Clear potential host leakage
    cmd.env_remove("SOURCES_BASE_PATH")
        .env_remove("SOURCES_TIMEOUT")
        .env_remove("SOURCES_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `sources-cli` command with a specific base path.
///
/// This is a convenience wrapper around `sources_cmd()` that sets
/// `SOURCES_BASE_PATH` to the provided value. All other hermeticity
/// guarantees (DOTENV_DISABLED=1, cleared env vars) are preserved.
#[allow(dead_code)]
pub fn sources_cmd_with_base_path(base_path: &str) -> Command {
    let mut cmd = sources_cmd();
    cmd.env("SOURCES_BASE_PATH", base_path);
    cmd
}
