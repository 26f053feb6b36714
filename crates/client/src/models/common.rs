//! Common types shared across Sources API models.
//!
//! This module contains the list envelope and error body shapes used by
//! multiple resource modules. It does NOT contain resource-specific models.

use serde::Deserialize;

/// Generic list envelope returned by collection endpoints.
///
/// Single-resource endpoints return the bare object; only lists are
/// wrapped. `meta` is absent on some deployments, so both fields tolerate
/// missing keys.
#[derive(Debug, Deserialize, Clone)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default)]
    pub meta: Option<CollectionMeta>,
    #[serde(default)]
    pub data: Vec<T>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CollectionMeta {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Error body shape returned by the service.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorBody {
    pub errors: Vec<ApiErrorDetail>,
}

/// A single error entry in an error response.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorDetail {
    pub status: Option<String>,
    pub detail: Option<String>,
}
