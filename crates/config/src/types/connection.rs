//! Connection configuration types for Sources TUI.
//!
//! Responsibilities:
//! - Define connection settings (base path, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and identity.
//! - Resolve the versioned API base from the configured base path.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - A base path ending in `/` points directly at the inventory service;
//!   any other base path gets the microservice segment appended.

use crate::constants::{API_VERSION, DEFAULT_TIMEOUT_SECS, SERVICE_PATH};
use crate::types::identity::IdentityConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Resolve the full API base from a configured base path.
///
/// A trailing slash means the base already points at the inventory service,
/// so only the version segment is appended. Anything else gets the
/// microservice path and version appended, which is how the hosted platform
/// exposes the service.
pub fn resolve_api_base(base_path: &str) -> String {
    if base_path.ends_with('/') {
        format!("{base_path}{API_VERSION}")
    } else {
        format!("{base_path}{SERVICE_PATH}/{API_VERSION}")
    }
}

/// Connection configuration for the Sources inventory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base path of the service (e.g., https://cloud.example.com/api or
    /// http://localhost:4000/api/ for a locally running inventory API)
    pub base_path: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Connection timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// The versioned API base every request URL is built from.
    pub fn api_base(&self) -> String {
        resolve_api_base(&self.base_path)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Identity settings
    pub identity: IdentityConfig,
}

impl Config {
    /// Create a config targeting the given base path with no identity header.
    pub fn anonymous(base_path: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_path,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            identity: IdentityConfig::default(),
        }
    }

    /// Create a config targeting the given base path with a development
    /// account identity.
    pub fn with_account(base_path: String, account_number: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_path,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            identity: IdentityConfig {
                account_number: Some(account_number),
            },
        }
    }
}
