//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide multiple output formats: JSON, Table, and CSV.
//! - Implement the `Formatter` trait for the Sources resource types.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! Invariants:
//! - Machine formats stay parseable on empty lists (JSON `[]`, headers-only
//!   CSV); tables print a human message instead.
//! - Missing values render as "N/A" in tables and as empty cells in CSV.

use anyhow::Result;
use sources_client::{
    Application, ApplicationType, CollectionMeta, Endpoint, Source, SourceDetail, SourceType,
};

mod common;
mod csv;
mod json;
mod table;

pub use common::{output_result, write_to_file};
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: json, table, csv",
                s
            ),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a page of sources, resolving type names against the catalog.
    fn format_sources(
        &self,
        sources: &[Source],
        types: &[SourceType],
        meta: Option<&CollectionMeta>,
    ) -> Result<String>;

    /// Format a source together with its endpoint and authentication.
    fn format_source_detail(&self, detail: &SourceDetail) -> Result<String>;

    /// Format the source type catalog.
    fn format_source_types(&self, types: &[SourceType]) -> Result<String>;

    /// Format the application type catalog.
    fn format_application_types(&self, app_types: &[ApplicationType]) -> Result<String>;

    /// Format applications list.
    fn format_applications(&self, applications: &[Application]) -> Result<String>;

    /// Format endpoints list.
    fn format_endpoints(&self, endpoints: &[Endpoint]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Resolve a source type id to its catalog name, falling back to the raw id.
fn source_type_name<'a>(types: &'a [SourceType], source_type_id: &'a str) -> &'a str {
    types
        .iter()
        .find(|t| t.id == source_type_id)
        .map(|t| t.name.as_str())
        .unwrap_or(source_type_id)
}
