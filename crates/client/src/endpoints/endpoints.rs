//! Endpoint endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{Collection, Endpoint, EndpointCreate, EndpointUpdate};

/// List the endpoints belonging to one source.
pub async fn list_source_endpoints(
    client: &Client,
    api_base: &str,
    source_id: &str,
) -> Result<Collection<Endpoint>> {
    let url = format!("{}/sources/{}/endpoints", api_base, source_id);
    let response = send_request(client.get(&url)).await?;
    Ok(response.json().await?)
}

/// List endpoints across sources, filtered by source ids.
pub async fn list_endpoints(
    client: &Client,
    api_base: &str,
    source_ids: &[String],
) -> Result<Collection<Endpoint>> {
    let url = format!("{}/endpoints", api_base);
    let builder = client
        .get(&url)
        .query(&[("source_id", source_ids.join(","))]);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Create an endpoint.
pub async fn create_endpoint(
    client: &Client,
    api_base: &str,
    endpoint: &EndpointCreate,
) -> Result<Endpoint> {
    let url = format!("{}/endpoints", api_base);
    let response = send_request(client.post(&url).json(endpoint)).await?;
    Ok(response.json().await?)
}

/// Update an endpoint. The response body is not used.
pub async fn update_endpoint(
    client: &Client,
    api_base: &str,
    endpoint_id: &str,
    update: &EndpointUpdate,
) -> Result<()> {
    let url = format!("{}/endpoints/{}", api_base, endpoint_id);
    send_request(client.patch(&url).json(update)).await?;
    Ok(())
}
