//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format resources as CSV with a header row.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.
//!
//! Invariants:
//! - Empty lists still produce the header row so downstream parsers see a
//!   stable schema.
//! - Missing values become empty cells, never "N/A".

use anyhow::Result;
use csv::Writer;
use sources_client::{
    Application, ApplicationType, CollectionMeta, Endpoint, Source, SourceDetail, SourceType,
};

use crate::formatters::Formatter;
use crate::formatters::source_type_name;

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_sources(
        &self,
        sources: &[Source],
        types: &[SourceType],
        _meta: Option<&CollectionMeta>,
    ) -> Result<String> {
        // The csv crate writes bytes, so we buffer in memory first
        let mut buffer = Vec::new();
        {
            let mut w = Writer::from_writer(&mut buffer);

            w.write_record(["id", "name", "source_type", "uid", "created_at", "updated_at"])?;

            for source in sources {
                w.write_record([
                    source.id.clone(),
                    source.name.clone(),
                    source_type_name(types, &source.source_type_id).to_string(),
                    source.uid.clone().unwrap_or_default(),
                    source.created_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                    source.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                ])?;
            }

            w.flush()?;
        }

        Ok(String::from_utf8(buffer)?)
    }

    fn format_source_detail(&self, detail: &SourceDetail) -> Result<String> {
        let mut buffer = Vec::new();
        {
            let mut w = Writer::from_writer(&mut buffer);

            w.write_record([
                "source_id",
                "name",
                "source_type_id",
                "endpoint_id",
                "scheme",
                "host",
                "port",
                "path",
                "authentication_id",
                "username",
                "authtype",
            ])?;

            let endpoint = detail.endpoint.as_ref();
            let authentication = detail.authentication.as_ref();

            w.write_record([
                detail.source.id.clone(),
                detail.source.name.clone(),
                detail.source.source_type_id.clone(),
                endpoint.map(|e| e.id.clone()).unwrap_or_default(),
                endpoint.and_then(|e| e.scheme.clone()).unwrap_or_default(),
                endpoint.and_then(|e| e.host.clone()).unwrap_or_default(),
                endpoint
                    .and_then(|e| e.port)
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
                endpoint.and_then(|e| e.path.clone()).unwrap_or_default(),
                authentication.map(|a| a.id.clone()).unwrap_or_default(),
                authentication
                    .and_then(|a| a.username.clone())
                    .unwrap_or_default(),
                authentication
                    .and_then(|a| a.authtype.clone())
                    .unwrap_or_default(),
            ])?;

            w.flush()?;
        }

        Ok(String::from_utf8(buffer)?)
    }

    fn format_source_types(&self, types: &[SourceType]) -> Result<String> {
        let mut buffer = Vec::new();
        {
            let mut w = Writer::from_writer(&mut buffer);

            w.write_record(["id", "name", "product_name", "vendor"])?;

            for source_type in types {
                w.write_record([
                    source_type.id.clone(),
                    source_type.name.clone(),
                    source_type.product_name.clone().unwrap_or_default(),
                    source_type.vendor.clone().unwrap_or_default(),
                ])?;
            }

            w.flush()?;
        }

        Ok(String::from_utf8(buffer)?)
    }

    fn format_application_types(&self, app_types: &[ApplicationType]) -> Result<String> {
        let mut buffer = Vec::new();
        {
            let mut w = Writer::from_writer(&mut buffer);

            w.write_record(["id", "name", "display_name"])?;

            for app_type in app_types {
                w.write_record([
                    app_type.id.clone(),
                    app_type.name.clone(),
                    app_type.display_name.clone().unwrap_or_default(),
                ])?;
            }

            w.flush()?;
        }

        Ok(String::from_utf8(buffer)?)
    }

    fn format_applications(&self, applications: &[Application]) -> Result<String> {
        let mut buffer = Vec::new();
        {
            let mut w = Writer::from_writer(&mut buffer);

            w.write_record(["id", "source_id", "application_type_id"])?;

            for application in applications {
                w.write_record([
                    application.id.clone(),
                    application.source_id.clone(),
                    application.application_type_id.clone(),
                ])?;
            }

            w.flush()?;
        }

        Ok(String::from_utf8(buffer)?)
    }

    fn format_endpoints(&self, endpoints: &[Endpoint]) -> Result<String> {
        let mut buffer = Vec::new();
        {
            let mut w = Writer::from_writer(&mut buffer);

            w.write_record([
                "id",
                "source_id",
                "role",
                "scheme",
                "host",
                "port",
                "path",
                "verify_ssl",
                "default",
            ])?;

            for endpoint in endpoints {
                w.write_record([
                    endpoint.id.clone(),
                    endpoint.source_id.clone(),
                    endpoint.role.clone().unwrap_or_default(),
                    endpoint.scheme.clone().unwrap_or_default(),
                    endpoint.host.clone().unwrap_or_default(),
                    endpoint.port.map(|p| p.to_string()).unwrap_or_default(),
                    endpoint.path.clone().unwrap_or_default(),
                    endpoint
                        .verify_ssl
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                    endpoint.default.map(|v| v.to_string()).unwrap_or_default(),
                ])?;
            }

            w.flush()?;
        }

        Ok(String::from_utf8(buffer)?)
    }
}
