//! Main Sources REST API client and API methods.
//!
//! This module provides the primary [`SourcesClient`] for interacting with
//! the Sources inventory REST API. An instance is constructed explicitly
//! via [`builder::SourcesClientBuilder`] and passed to whatever needs it;
//! there is no process-wide client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Multi-step resource orchestration (see [`crate::flows`])
//!
//! # Invariants
//! - Every API method establishes identity first: in provider mode the
//!   provider hook is awaited before the request and a failure means the
//!   request is never sent; in account mode the pre-encoded header is
//!   already installed on the HTTP client.
//! - One request per call. No caching, no retry, no backoff.

pub mod builder;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::identity::IdentityStrategy;
use crate::models::{
    Application, ApplicationType, Authentication, AuthenticationCreate, AuthenticationUpdate,
    Collection, Endpoint, EndpointCreate, EndpointUpdate, Source, SourceCreate, SourceType,
    SourceUpdate,
};

pub use endpoints::ListSourcesParams;

/// Sources REST API client.
///
/// # Creating a Client
///
/// Use [`SourcesClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use sources_client::{IdentityStrategy, SourcesClient};
///
/// let client = SourcesClient::builder()
///     .api_base("https://cloud.example.com/api/topological-inventory/v0.1".to_string())
///     .identity(IdentityStrategy::Account { account_number: "12345".to_string() })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SourcesClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) identity: IdentityStrategy,
}

impl SourcesClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SourcesClientBuilder {
        builder::SourcesClientBuilder::new()
    }

    /// The resolved API base this client talks to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The identity strategy this client was built with.
    pub fn identity(&self) -> &IdentityStrategy {
        &self.identity
    }

    /// Establish identity before a request.
    ///
    /// In provider mode the hook is awaited and its failure aborts the
    /// call. The other strategies need nothing at request time.
    async fn ensure_identity(&self) -> Result<()> {
        match &self.identity {
            IdentityStrategy::Provider(provider) => provider
                .ensure_identity()
                .await
                .map_err(ClientError::Identity),
            IdentityStrategy::Account { .. } | IdentityStrategy::Anonymous => Ok(()),
        }
    }

    /// List sources, optionally filtered by source type.
    pub async fn list_sources(&self, params: &ListSourcesParams) -> Result<Collection<Source>> {
        self.ensure_identity().await?;
        endpoints::list_sources(&self.http, &self.api_base, params).await
    }

    /// Fetch a single source by id.
    pub async fn show_source(&self, source_id: &str) -> Result<Source> {
        self.ensure_identity().await?;
        endpoints::show_source(&self.http, &self.api_base, source_id).await
    }

    /// Create a source.
    pub async fn create_source(&self, source: &SourceCreate) -> Result<Source> {
        self.ensure_identity().await?;
        endpoints::create_source(&self.http, &self.api_base, source).await
    }

    /// Update a source's name.
    pub async fn update_source(&self, source_id: &str, update: &SourceUpdate) -> Result<()> {
        self.ensure_identity().await?;
        endpoints::update_source(&self.http, &self.api_base, source_id, update).await
    }

    /// Delete a source.
    pub async fn delete_source(&self, source_id: &str) -> Result<()> {
        self.ensure_identity().await?;
        endpoints::delete_source(&self.http, &self.api_base, source_id).await
    }

    /// List all known source types.
    pub async fn list_source_types(&self) -> Result<Collection<SourceType>> {
        self.ensure_identity().await?;
        endpoints::list_source_types(&self.http, &self.api_base).await
    }

    /// List the endpoints belonging to one source.
    pub async fn list_source_endpoints(&self, source_id: &str) -> Result<Collection<Endpoint>> {
        self.ensure_identity().await?;
        endpoints::list_source_endpoints(&self.http, &self.api_base, source_id).await
    }

    /// List endpoints across sources, filtered by source ids.
    pub async fn list_endpoints(&self, source_ids: &[String]) -> Result<Collection<Endpoint>> {
        self.ensure_identity().await?;
        endpoints::list_endpoints(&self.http, &self.api_base, source_ids).await
    }

    /// Create an endpoint.
    pub async fn create_endpoint(&self, endpoint: &EndpointCreate) -> Result<Endpoint> {
        self.ensure_identity().await?;
        endpoints::create_endpoint(&self.http, &self.api_base, endpoint).await
    }

    /// Update an endpoint.
    pub async fn update_endpoint(&self, endpoint_id: &str, update: &EndpointUpdate) -> Result<()> {
        self.ensure_identity().await?;
        endpoints::update_endpoint(&self.http, &self.api_base, endpoint_id, update).await
    }

    /// List the authentications attached to one endpoint.
    pub async fn list_endpoint_authentications(
        &self,
        endpoint_id: &str,
    ) -> Result<Collection<Authentication>> {
        self.ensure_identity().await?;
        endpoints::list_endpoint_authentications(&self.http, &self.api_base, endpoint_id).await
    }

    /// Create an authentication.
    pub async fn create_authentication(
        &self,
        authentication: &AuthenticationCreate,
    ) -> Result<Authentication> {
        self.ensure_identity().await?;
        endpoints::create_authentication(&self.http, &self.api_base, authentication).await
    }

    /// Update an authentication.
    pub async fn update_authentication(
        &self,
        authentication_id: &str,
        update: &AuthenticationUpdate,
    ) -> Result<()> {
        self.ensure_identity().await?;
        endpoints::update_authentication(&self.http, &self.api_base, authentication_id, update)
            .await
    }

    /// List all known application types.
    pub async fn list_application_types(&self) -> Result<Collection<ApplicationType>> {
        self.ensure_identity().await?;
        endpoints::list_application_types(&self.http, &self.api_base).await
    }

    /// List applications attached to the given sources.
    pub async fn list_applications(&self, source_ids: &[String]) -> Result<Collection<Application>> {
        self.ensure_identity().await?;
        endpoints::list_applications(&self.http, &self.api_base, source_ids).await
    }
}
