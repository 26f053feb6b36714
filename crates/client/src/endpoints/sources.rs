//! Source endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{Collection, Source, SourceCreate, SourceUpdate};

/// Parameters for listing sources.
#[derive(Debug, Clone, Default)]
pub struct ListSourcesParams {
    /// Restrict the list to one source type.
    pub source_type_id: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// List sources, optionally filtered by source type.
pub async fn list_sources(
    client: &Client,
    api_base: &str,
    params: &ListSourcesParams,
) -> Result<Collection<Source>> {
    let url = format!("{}/sources", api_base);

    let mut query_params: Vec<(String, String)> = Vec::new();
    if let Some(ref source_type_id) = params.source_type_id {
        query_params.push((
            "filter[source_type_id][eq]".to_string(),
            source_type_id.clone(),
        ));
    }
    if let Some(limit) = params.limit {
        query_params.push(("limit".to_string(), limit.to_string()));
    }
    if let Some(offset) = params.offset {
        query_params.push(("offset".to_string(), offset.to_string()));
    }

    let builder = client.get(&url).query(&query_params);
    let response = send_request(builder).await?;

    Ok(response.json().await?)
}

/// Fetch a single source by id.
pub async fn show_source(client: &Client, api_base: &str, source_id: &str) -> Result<Source> {
    let url = format!("{}/sources/{}", api_base, source_id);
    let response = send_request(client.get(&url)).await?;
    Ok(response.json().await?)
}

/// Create a source.
pub async fn create_source(
    client: &Client,
    api_base: &str,
    source: &SourceCreate,
) -> Result<Source> {
    let url = format!("{}/sources", api_base);
    let response = send_request(client.post(&url).json(source)).await?;
    Ok(response.json().await?)
}

/// Update a source. The response body is not used.
pub async fn update_source(
    client: &Client,
    api_base: &str,
    source_id: &str,
    update: &SourceUpdate,
) -> Result<()> {
    let url = format!("{}/sources/{}", api_base, source_id);
    send_request(client.patch(&url).json(update)).await?;
    Ok(())
}

/// Delete a source. Only the source record itself is removed; endpoints and
/// authentications created alongside it are the server's concern.
pub async fn delete_source(client: &Client, api_base: &str, source_id: &str) -> Result<()> {
    let url = format!("{}/sources/{}", api_base, source_id);
    send_request(client.delete(&url)).await?;
    Ok(())
}
