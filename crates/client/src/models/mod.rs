//! Data models for Sources API requests and responses.
//!
//! Read models and write payloads are separate types: the service accepts
//! only a subset of each resource's fields on create and a different subset
//! on update, and the payload types encode exactly which fields each request
//! carries. Types are organized by resource in submodules and re-exported
//! here for convenient access.

pub mod applications;
pub mod authentications;
pub mod common;
pub mod endpoints;
pub mod sources;

pub use applications::{Application, ApplicationType};
pub use authentications::{
    Authentication, AuthenticationCreate, AuthenticationUpdate, ENDPOINT_RESOURCE_TYPE,
};
pub use common::{ApiErrorBody, ApiErrorDetail, Collection, CollectionMeta};
pub use endpoints::{Endpoint, EndpointCreate, EndpointUpdate};
pub use sources::{Source, SourceCreate, SourceType, SourceUpdate};
