//! Application and application type models.
//!
//! Applications are read-only from this client's point of view: they are
//! listed to show what is attached to a source, never created or modified.

use serde::{Deserialize, Serialize};

/// A catalog entry describing an application that can consume a source.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApplicationType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// An application attached to a source.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Application {
    pub id: String,
    pub source_id: String,
    pub application_type_id: String,
}
