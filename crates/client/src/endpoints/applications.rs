//! Application endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{Application, ApplicationType, Collection};

/// List all known application types.
pub async fn list_application_types(
    client: &Client,
    api_base: &str,
) -> Result<Collection<ApplicationType>> {
    let url = format!("{}/application_types", api_base);
    let response = send_request(client.get(&url)).await?;
    Ok(response.json().await?)
}

/// List applications attached to the given sources.
pub async fn list_applications(
    client: &Client,
    api_base: &str,
    source_ids: &[String],
) -> Result<Collection<Application>> {
    let url = format!("{}/applications", api_base);
    let builder = client
        .get(&url)
        .query(&[("source_id", source_ids.join(","))]);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}
