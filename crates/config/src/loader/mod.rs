//! Configuration loading for Sources TUI.
//!
//! Responsibilities:
//! - Collect configuration from command-line overrides, environment
//!   variables, and an optional `.env` file.
//! - Build the final `Config` with defaults applied.
//!
//! Does NOT handle:
//! - Argument parsing itself (binaries pass their overrides in via setters).
//!
//! Invariants:
//! - Precedence is command line, then environment, then defaults.
//! - `.env` is loaded before the environment is read, so values from the
//!   file behave exactly like ambient environment variables.

mod env;
mod error;

pub use error::ConfigError;

use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::{Config, ConnectionConfig, IdentityConfig};

/// Builder collecting configuration values before constructing a `Config`.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_path: Option<String>,
    account_number: Option<String>,
    timeout: Option<Duration>,
    skip_verify: Option<bool>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn set_base_path(&mut self, value: Option<String>) {
        self.base_path = value;
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn set_account_number(&mut self, value: Option<String>) {
        self.account_number = value;
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn set_timeout(&mut self, value: Option<Duration>) {
        self.timeout = value;
    }

    pub fn skip_verify(&self) -> Option<bool> {
        self.skip_verify
    }

    pub fn set_skip_verify(&mut self, value: Option<bool>) {
        self.skip_verify = value;
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load a `.env` file from the working directory if one exists.
    ///
    /// Setting `DOTENV_DISABLED` to "true" or "1" skips the file, which
    /// keeps integration tests hermetic. A missing file is not an error.
    /// Parse failures are reported without the offending line contents,
    /// which may hold credentials.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(());
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded environment overrides from .env");
                Ok(())
            }
            Err(err) if err.not_found() => Ok(()),
            Err(dotenvy::Error::LineParse(_, line)) => Err(ConfigError::DotEnv {
                message: format!("invalid syntax at line {line}"),
            }),
            Err(err) => Err(ConfigError::DotEnv {
                message: err.to_string(),
            }),
        }
    }

    /// Resolve the final configuration.
    ///
    /// Applies `.env`, then the environment, then defaults. Fields set via
    /// the setters beforehand (command-line overrides) are never replaced.
    pub fn load(mut self) -> Result<Config, ConfigError> {
        self.load_dotenv()?;
        env::apply_env(&mut self)?;

        let base_path = self.base_path.ok_or(ConfigError::MissingBasePath)?;

        Ok(Config {
            connection: ConnectionConfig {
                base_path,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout: self
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            },
            identity: IdentityConfig {
                account_number: self.account_number,
            },
        })
    }
}
