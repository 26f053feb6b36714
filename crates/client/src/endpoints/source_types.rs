//! Source type catalog endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{Collection, SourceType};

/// List all known source types.
pub async fn list_source_types(client: &Client, api_base: &str) -> Result<Collection<SourceType>> {
    let url = format!("{}/source_types", api_base);
    let response = send_request(client.get(&url)).await?;
    Ok(response.json().await?)
}
