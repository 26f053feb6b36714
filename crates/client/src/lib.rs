//! Sources REST API client.
//!
//! This crate provides a type-safe client for the Sources inventory REST
//! API. It covers the source, endpoint, authentication, and application
//! resources, plus the multi-step flows that keep the three core records
//! in step with each other.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod flows;
mod identity;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::SourcesClientBuilder;
pub use client::{ListSourcesParams, SourcesClient};
pub use error::{ClientError, Result};
pub use flows::{
    EndpointFields, FlowError, FlowStage, SourceDetail, SourceForm, create_source_flow,
    endpoint_url, load_source_for_edit, parse_url, remove_source, update_source_flow,
};
pub use identity::{IDENTITY_HEADER, IdentityProvider, IdentityStrategy, encode_identity_header};
pub use models::{
    Application, ApplicationType, Authentication, AuthenticationCreate, AuthenticationUpdate,
    Collection, CollectionMeta, ENDPOINT_RESOURCE_TYPE, Endpoint, EndpointCreate, EndpointUpdate,
    Source, SourceCreate, SourceType, SourceUpdate,
};
