//! Multi-step source management flows.
//!
//! A usable source is three linked records: the source itself, an endpoint
//! pointing at the provider, and an authentication for that endpoint. The
//! service offers no transactional way to manage them together, so these
//! flows sequence the individual calls client-side.
//!
//! # Invariants
//! - Steps run strictly in order and short-circuit on the first failure.
//! - There is no rollback: a failed step leaves every earlier step's record
//!   on the server. A failed endpoint creation leaves the source behind; a
//!   failed authentication creation leaves source and endpoint behind.
//! - Each failed step logs the raw upstream error, then surfaces only a
//!   coarse stage-labeled error to the caller.
//! - Source type resolution happens before any request: an unknown type
//!   name fails the create flow without touching the network.

mod url_fields;

pub use url_fields::{EndpointFields, endpoint_url, parse_url, url_or_host};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::client::SourcesClient;
use crate::error::ClientError;
use crate::models::{
    Authentication, AuthenticationCreate, AuthenticationUpdate, ENDPOINT_RESOURCE_TYPE, Endpoint,
    EndpointCreate, EndpointUpdate, Source, SourceCreate, SourceType, SourceUpdate,
};

/// Values collected by the add/edit source form.
///
/// `source_name` and `source_type` are required by the form itself; the
/// rest is optional and absent fields are simply left out of the request
/// payloads. Secrets are held as [`SecretString`] so a stray Debug never
/// prints them.
#[derive(Debug, Clone, Default)]
pub struct SourceForm {
    pub source_name: String,
    pub source_type: String,
    pub url: Option<String>,
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub role: Option<String>,
    pub verify_ssl: Option<bool>,
    pub certificate_authority: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<SecretString>,
    pub token: Option<SecretString>,
    pub authtype: Option<String>,
}

/// A source with its first endpoint and that endpoint's first
/// authentication, as loaded for the edit form.
///
/// Serializes cleanly: none of the three records carries a secret.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDetail {
    pub source: Source,
    pub endpoint: Option<Endpoint>,
    pub authentication: Option<Authentication>,
}

/// The step of a flow that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    SourceCreation,
    EndpointCreation,
    AuthenticationCreation,
    SourceUpdate,
    EndpointUpdate,
    AuthenticationUpdate,
    SourceRemoval,
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::SourceCreation => "Source creation failure.",
            Self::EndpointCreation => "Endpoint creation failure.",
            Self::AuthenticationCreation => "Authentication creation failure.",
            Self::SourceUpdate => "Source update failure.",
            Self::EndpointUpdate => "Endpoint update failure.",
            Self::AuthenticationUpdate => "Authentication update failure.",
            Self::SourceRemoval => "Source removal failed.",
        };
        f.write_str(message)
    }
}

/// Errors from multi-step flows.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The form named a source type that is not in the known list. Raised
    /// before any request is made.
    #[error("Unknown source type: {0}")]
    UnknownSourceType(String),

    /// A step of the flow failed. Earlier steps' records remain on the
    /// server.
    #[error("{stage}")]
    Step {
        stage: FlowStage,
        source: ClientError,
    },
}

/// Log the raw upstream error for a failed step and wrap it in the
/// stage-labeled flow error.
fn step_failure(stage: FlowStage) -> impl FnOnce(ClientError) -> FlowError {
    move |err| {
        tracing::error!(error = %err, "{}", stage);
        FlowError::Step { stage, source: err }
    }
}

/// Token wins over password; an empty token falls through to the password.
fn effective_password(form: &SourceForm) -> Option<SecretString> {
    match form.token.as_ref() {
        Some(token) if !token.expose_secret().is_empty() => Some(token.clone()),
        _ => form.password.clone(),
    }
}

/// Create a source with its endpoint and authentication.
///
/// Resolves the form's source type name against `source_types` first; an
/// unknown name fails before any request. Then creates the source, its
/// default endpoint, and the endpoint's authentication, in that order,
/// each step consuming the id the previous one returned. Returns the
/// created authentication.
pub async fn create_source_flow(
    client: &SourcesClient,
    form: &SourceForm,
    source_types: &[SourceType],
) -> Result<Authentication, FlowError> {
    let source_type_id = source_types
        .iter()
        .find(|source_type| source_type.name == form.source_type)
        .map(|source_type| source_type.id.clone())
        .ok_or_else(|| FlowError::UnknownSourceType(form.source_type.clone()))?;

    let source = client
        .create_source(&SourceCreate {
            name: form.source_name.clone(),
            source_type_id,
        })
        .await
        .map_err(step_failure(FlowStage::SourceCreation))?;

    let fields = url_or_host(form);

    let endpoint = client
        .create_endpoint(&EndpointCreate {
            default: true,
            source_id: source.id.clone(),
            role: form.role.clone(),
            scheme: fields.scheme.clone(),
            host: fields.host.clone(),
            port: fields.numeric_port(),
            path: fields.path.clone(),
            verify_ssl: form.verify_ssl,
            certificate_authority: form.certificate_authority.clone(),
        })
        .await
        .map_err(step_failure(FlowStage::EndpointCreation))?;

    client
        .create_authentication(&AuthenticationCreate {
            resource_id: endpoint.id.clone(),
            resource_type: ENDPOINT_RESOURCE_TYPE.to_string(),
            username: form.user_name.clone(),
            password: effective_password(form),
            authtype: form.authtype.clone(),
        })
        .await
        .map_err(step_failure(FlowStage::AuthenticationCreation))
}

/// Update a source, its endpoint, and its authentication from form values.
///
/// Mirrors the create flow's ordering against the already-loaded ids in
/// `detail`, with each resource receiving only the fields its update
/// accepts. A detail without an endpoint (or authentication) simply has
/// nothing to update at that step and the flow stops there successfully.
pub async fn update_source_flow(
    client: &SourcesClient,
    detail: &SourceDetail,
    form: &SourceForm,
) -> Result<(), FlowError> {
    client
        .update_source(
            &detail.source.id,
            &SourceUpdate {
                name: form.source_name.clone(),
            },
        )
        .await
        .map_err(step_failure(FlowStage::SourceUpdate))?;

    let Some(endpoint) = detail.endpoint.as_ref() else {
        tracing::debug!(
            source_id = %detail.source.id,
            "source has no endpoint, skipping endpoint and authentication update"
        );
        return Ok(());
    };

    let fields = url_or_host(form);

    client
        .update_endpoint(
            &endpoint.id,
            &EndpointUpdate {
                scheme: fields.scheme.clone(),
                host: fields.host.clone(),
                port: fields.numeric_port(),
                path: fields.path.clone(),
                verify_ssl: form.verify_ssl,
                certificate_authority: form.certificate_authority.clone(),
            },
        )
        .await
        .map_err(step_failure(FlowStage::EndpointUpdate))?;

    let Some(authentication) = detail.authentication.as_ref() else {
        tracing::debug!(
            endpoint_id = %endpoint.id,
            "endpoint has no authentication, skipping authentication update"
        );
        return Ok(());
    };

    client
        .update_authentication(
            &authentication.id,
            &AuthenticationUpdate {
                username: form.user_name.clone(),
                password: effective_password(form),
            },
        )
        .await
        .map_err(step_failure(FlowStage::AuthenticationUpdate))
}

/// Load a source together with its first endpoint and that endpoint's
/// first authentication.
///
/// A source without endpoints is a valid result: the detail comes back
/// with both nested records absent and no error. Failures propagate raw;
/// this flow adds no stage labels.
pub async fn load_source_for_edit(
    client: &SourcesClient,
    source_id: &str,
) -> Result<SourceDetail, ClientError> {
    let source = client.show_source(source_id).await?;
    let endpoints = client.list_source_endpoints(source_id).await?;

    // we take just the first endpoint
    let Some(endpoint) = endpoints.data.into_iter().next() else {
        return Ok(SourceDetail {
            source,
            endpoint: None,
            authentication: None,
        });
    };

    let authentications = client.list_endpoint_authentications(&endpoint.id).await?;
    // we take just the first authentication
    let authentication = authentications.data.into_iter().next();

    Ok(SourceDetail {
        source,
        endpoint: Some(endpoint),
        authentication,
    })
}

/// Delete a source.
///
/// Only the source record is deleted. Endpoints and authentications that
/// were created alongside it are left to the server; nothing here cleans
/// them up.
pub async fn remove_source(client: &SourcesClient, source_id: &str) -> Result<(), FlowError> {
    match client.delete_source(source_id).await {
        Ok(()) => {
            tracing::info!(source_id, "source deleted");
            Ok(())
        }
        Err(err) => Err(step_failure(FlowStage::SourceRemoval)(err)),
    }
}
