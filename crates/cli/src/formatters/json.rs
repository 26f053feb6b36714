//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.
//! - Type name resolution (JSON output carries the raw records).

use anyhow::Result;
use sources_client::{
    Application, ApplicationType, CollectionMeta, Endpoint, Source, SourceDetail, SourceType,
};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_sources(
        &self,
        sources: &[Source],
        _types: &[SourceType],
        _meta: Option<&CollectionMeta>,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(sources)?)
    }

    fn format_source_detail(&self, detail: &SourceDetail) -> Result<String> {
        Ok(serde_json::to_string_pretty(detail)?)
    }

    fn format_source_types(&self, types: &[SourceType]) -> Result<String> {
        Ok(serde_json::to_string_pretty(types)?)
    }

    fn format_application_types(&self, app_types: &[ApplicationType]) -> Result<String> {
        Ok(serde_json::to_string_pretty(app_types)?)
    }

    fn format_applications(&self, applications: &[Application]) -> Result<String> {
        Ok(serde_json::to_string_pretty(applications)?)
    }

    fn format_endpoints(&self, endpoints: &[Endpoint]) -> Result<String> {
        Ok(serde_json::to_string_pretty(endpoints)?)
    }
}
