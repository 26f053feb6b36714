//! CLI command implementations.

pub mod application_types;
pub mod applications;
pub mod endpoints;
pub mod source_types;
pub mod sources;

use anyhow::Result;
use sources_client::SourcesClient;
use sources_config::Config;

/// Build an API client from the resolved configuration.
pub fn build_client(config: &Config) -> Result<SourcesClient> {
    Ok(SourcesClient::builder().from_config(config).build()?)
}
