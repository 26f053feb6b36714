//! Authentication endpoints.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{
    Authentication, AuthenticationCreate, AuthenticationUpdate, Collection,
};

/// List the authentications attached to one endpoint.
pub async fn list_endpoint_authentications(
    client: &Client,
    api_base: &str,
    endpoint_id: &str,
) -> Result<Collection<Authentication>> {
    let url = format!("{}/endpoints/{}/authentications", api_base, endpoint_id);
    let response = send_request(client.get(&url)).await?;
    Ok(response.json().await?)
}

/// Create an authentication.
pub async fn create_authentication(
    client: &Client,
    api_base: &str,
    authentication: &AuthenticationCreate,
) -> Result<Authentication> {
    let url = format!("{}/authentications", api_base);
    let response = send_request(client.post(&url).json(authentication)).await?;
    Ok(response.json().await?)
}

/// Update an authentication. The response body is not used.
pub async fn update_authentication(
    client: &Client,
    api_base: &str,
    authentication_id: &str,
    update: &AuthenticationUpdate,
) -> Result<()> {
    let url = format!("{}/authentications/{}", api_base, authentication_id);
    send_request(client.patch(&url).json(update)).await?;
    Ok(())
}
