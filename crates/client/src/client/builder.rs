//! Client builder for constructing [`SourcesClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (the API base)
//! - Normalizing the API base (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification,
//!   and the pre-encoded identity header in account mode)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SourcesClient`] methods in `mod.rs`)
//! - Resolving the versioned API base from a raw base path (handled by
//!   `sources-config`; `from_config` applies it)
//!
//! # Invariants
//! - `api_base` is required and must be provided before calling `build()`
//! - The API base is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a
//!   warning

use std::time::Duration;

use sources_config::Config;
use sources_config::constants::DEFAULT_TIMEOUT_SECS;

use crate::client::SourcesClient;
use crate::error::{ClientError, Result};
use crate::identity::{IDENTITY_HEADER, IdentityStrategy, encode_identity_header};

/// Builder for creating a new [`SourcesClient`].
///
/// All configuration options have defaults except `api_base`, which is
/// required. The default identity strategy is [`IdentityStrategy::Anonymous`].
pub struct SourcesClientBuilder {
    api_base: Option<String>,
    identity: IdentityStrategy,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for SourcesClientBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            identity: IdentityStrategy::Anonymous,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourcesClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fully resolved API base, e.g.
    /// `https://cloud.example.com/api/topological-inventory/v0.1`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn api_base(mut self, api_base: String) -> Self {
        self.api_base = Some(api_base);
        self
    }

    /// Set the identity strategy.
    ///
    /// See [`IdentityStrategy`] for available options.
    pub fn identity(mut self, identity: IdentityStrategy) -> Self {
        self.identity = identity;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// This centralizes the conversion from config crate types to client
    /// crate types, eliminating duplication between CLI and TUI. The raw
    /// base path is resolved into the versioned API base here.
    pub fn from_config(mut self, config: &Config) -> Self {
        let identity = match &config.identity.account_number {
            Some(account_number) => IdentityStrategy::Account {
                account_number: account_number.clone(),
            },
            None => IdentityStrategy::Anonymous,
        };

        self.api_base = Some(config.connection.api_base());
        self.identity = identity;
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize an API base by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_api_base(api_base: String) -> String {
        api_base.trim_end_matches('/').to_string()
    }

    /// Build the [`SourcesClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `api_base` was not provided,
    /// [`ClientError::Identity`] if the account identity header cannot be
    /// encoded, and `ClientError::HttpError` if the HTTP client fails to
    /// build.
    pub fn build(self) -> Result<SourcesClient> {
        let api_base = self
            .api_base
            .ok_or_else(|| ClientError::InvalidUrl("api_base is required".to_string()))?;
        let api_base = Self::normalize_api_base(api_base);

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);

        if let IdentityStrategy::Account { account_number } = &self.identity {
            let encoded = encode_identity_header(account_number);
            let value = reqwest::header::HeaderValue::from_str(&encoded)
                .map_err(|e| ClientError::Identity(format!("invalid identity header: {e}")))?;
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(IDENTITY_HEADER, value);
            http_builder = http_builder.default_headers(headers);
        }

        if self.skip_verify {
            let is_https = api_base.starts_with("https://");
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SourcesClient {
            http,
            api_base,
            identity: self.identity,
        })
    }
}
