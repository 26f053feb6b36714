//! Source and source type models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A connection to an external provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub source_type_id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A catalog entry describing a kind of source (e.g. amazon, openshift).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourceType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
}

/// Request body for creating a source.
#[derive(Debug, Serialize, Clone)]
pub struct SourceCreate {
    pub name: String,
    pub source_type_id: String,
}

/// Request body for updating a source. Only the name is ever changed.
#[derive(Debug, Serialize, Clone)]
pub struct SourceUpdate {
    pub name: String,
}
