//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Sources configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace
//!   filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see the loader module).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Values already set on the loader (command-line overrides) take
//!   precedence; environment only fills unset fields.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::time::Duration;

use super::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Fields already set via the command line are left untouched.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.base_path().is_none() {
        if let Some(base_path) = env_var_or_none("SOURCES_BASE_PATH") {
            loader.set_base_path(Some(base_path));
        }
    }
    if loader.account_number().is_none() {
        if let Some(account) = env_var_or_none("FAKE_IDENTITY") {
            loader.set_account_number(Some(account));
        }
    }
    if loader.timeout().is_none() {
        if let Some(timeout) = env_var_or_none("SOURCES_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "SOURCES_TIMEOUT".to_string(),
                message: "must be a number".to_string(),
            })?;
            loader.set_timeout(Some(Duration::from_secs(secs)));
        }
    }
    if loader.skip_verify().is_none() {
        if let Some(skip) = env_var_or_none("SOURCES_SKIP_VERIFY") {
            loader.set_skip_verify(Some(skip.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    var: "SOURCES_SKIP_VERIFY".to_string(),
                    message: "must be true or false".to_string(),
                }
            })?));
        }
    }

    Ok(())
}
