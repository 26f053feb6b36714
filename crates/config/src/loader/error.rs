//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base path is required. Set SOURCES_BASE_PATH or pass --base-path.")]
    MissingBasePath,

    #[error("Failed to load .env file: {message}")]
    DotEnv { message: String },
}
