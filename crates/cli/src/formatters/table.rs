//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as fixed-width tables for terminal reading.
//! - Render the source detail view as labelled sections.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use sources_client::{
    Application, ApplicationType, CollectionMeta, Endpoint, Source, SourceDetail, SourceType,
    endpoint_url,
};

use crate::formatters::Formatter;
use crate::formatters::common::{format_missing, format_missing_display};
use crate::formatters::source_type_name;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_sources(
        &self,
        sources: &[Source],
        types: &[SourceType],
        meta: Option<&CollectionMeta>,
    ) -> Result<String> {
        let mut output = String::new();

        if sources.is_empty() {
            output.push_str("No sources found.\n");
            return Ok(output);
        }

        // Header
        output.push_str(&format!(
            "{:<8} {:<30} {:<20} {}\n",
            "ID", "NAME", "TYPE", "CREATED"
        ));
        output.push_str(&format!(
            "{:<8} {:<30} {:<20} {}\n",
            "==", "====", "====", "======="
        ));

        // Rows
        for source in sources {
            let type_name = source_type_name(types, &source.source_type_id);
            let created = format_timestamp(source.created_at);

            output.push_str(&format!(
                "{:<8} {:<30} {:<20} {}\n",
                source.id, source.name, type_name, created
            ));
        }

        if let Some(meta) = meta
            && let Some(footer) = build_pagination_footer(meta, sources.len())
        {
            output.push('\n');
            output.push_str(&footer);
            output.push('\n');
        }

        Ok(output)
    }

    fn format_source_detail(&self, detail: &SourceDetail) -> Result<String> {
        let mut output = String::new();

        output.push_str("--- Source ---\n");
        output.push_str(&format!("ID: {}\n", detail.source.id));
        output.push_str(&format!("Name: {}\n", detail.source.name));
        output.push_str(&format!("Type ID: {}\n", detail.source.source_type_id));
        output.push_str(&format!(
            "UID: {}\n",
            format_missing(detail.source.uid.as_deref())
        ));
        output.push_str(&format!(
            "Created: {}\n",
            format_timestamp(detail.source.created_at)
        ));
        output.push_str(&format!(
            "Updated: {}\n",
            format_timestamp(detail.source.updated_at)
        ));

        output.push('\n');
        match &detail.endpoint {
            Some(endpoint) => {
                output.push_str("--- Endpoint ---\n");
                output.push_str(&format!("ID: {}\n", endpoint.id));
                output.push_str(&format!(
                    "Role: {}\n",
                    format_missing(endpoint.role.as_deref())
                ));
                output.push_str(&format!("URL: {}\n", endpoint_url(endpoint)));
                output.push_str(&format!(
                    "Verify SSL: {}\n",
                    format_missing_display(endpoint.verify_ssl)
                ));
                if let Some(ref authority) = endpoint.certificate_authority {
                    output.push_str(&format!("Certificate authority: {}\n", authority));
                }
            }
            None => output.push_str("No endpoint.\n"),
        }

        output.push('\n');
        match &detail.authentication {
            Some(authentication) => {
                output.push_str("--- Authentication ---\n");
                output.push_str(&format!("ID: {}\n", authentication.id));
                output.push_str(&format!(
                    "Type: {}\n",
                    format_missing(authentication.authtype.as_deref())
                ));
                output.push_str(&format!(
                    "Username: {}\n",
                    format_missing(authentication.username.as_deref())
                ));
            }
            None => output.push_str("No authentication.\n"),
        }

        Ok(output)
    }

    fn format_source_types(&self, types: &[SourceType]) -> Result<String> {
        let mut output = String::new();

        if types.is_empty() {
            output.push_str("No source types found.\n");
            return Ok(output);
        }

        // Header
        output.push_str(&format!(
            "{:<8} {:<20} {:<35} {}\n",
            "ID", "NAME", "PRODUCT", "VENDOR"
        ));
        output.push_str(&format!(
            "{:<8} {:<20} {:<35} {}\n",
            "==", "====", "=======", "======"
        ));

        // Rows
        for source_type in types {
            let product = format_missing(source_type.product_name.as_deref());
            let vendor = format_missing(source_type.vendor.as_deref());

            output.push_str(&format!(
                "{:<8} {:<20} {:<35} {}\n",
                source_type.id, source_type.name, product, vendor
            ));
        }

        Ok(output)
    }

    fn format_application_types(&self, app_types: &[ApplicationType]) -> Result<String> {
        let mut output = String::new();

        if app_types.is_empty() {
            output.push_str("No application types found.\n");
            return Ok(output);
        }

        // Header
        output.push_str(&format!(
            "{:<8} {:<40} {}\n",
            "ID", "NAME", "DISPLAY NAME"
        ));
        output.push_str(&format!(
            "{:<8} {:<40} {}\n",
            "==", "====", "============"
        ));

        // Rows
        for app_type in app_types {
            let display_name = format_missing(app_type.display_name.as_deref());

            output.push_str(&format!(
                "{:<8} {:<40} {}\n",
                app_type.id, app_type.name, display_name
            ));
        }

        Ok(output)
    }

    fn format_applications(&self, applications: &[Application]) -> Result<String> {
        let mut output = String::new();

        if applications.is_empty() {
            output.push_str("No applications found.\n");
            return Ok(output);
        }

        // Header
        output.push_str(&format!(
            "{:<8} {:<10} {}\n",
            "ID", "SOURCE", "APP TYPE"
        ));
        output.push_str(&format!(
            "{:<8} {:<10} {}\n",
            "==", "======", "========"
        ));

        // Rows
        for application in applications {
            output.push_str(&format!(
                "{:<8} {:<10} {}\n",
                application.id, application.source_id, application.application_type_id
            ));
        }

        Ok(output)
    }

    fn format_endpoints(&self, endpoints: &[Endpoint]) -> Result<String> {
        let mut output = String::new();

        if endpoints.is_empty() {
            output.push_str("No endpoints found.\n");
            return Ok(output);
        }

        // Header
        output.push_str(&format!(
            "{:<8} {:<10} {:<14} {:<42} {}\n",
            "ID", "SOURCE", "ROLE", "URL", "VERIFY SSL"
        ));
        output.push_str(&format!(
            "{:<8} {:<10} {:<14} {:<42} {}\n",
            "==", "======", "====", "===", "=========="
        ));

        // Rows
        for endpoint in endpoints {
            let role = format_missing(endpoint.role.as_deref());
            let url = endpoint_url(endpoint);
            let verify_ssl = format_missing_display(endpoint.verify_ssl);

            output.push_str(&format!(
                "{:<8} {:<10} {:<14} {:<42} {}\n",
                endpoint.id, endpoint.source_id, role, url, verify_ssl
            ));
        }

        Ok(output)
    }
}

/// Render an optional timestamp for table output.
fn format_timestamp(timestamp: Option<chrono::DateTime<chrono::Utc>>) -> String {
    format_missing_display(timestamp.map(|t| t.format("%Y-%m-%d %H:%M")))
}

/// Build a pagination footer string from collection metadata.
///
/// - `offset` and `limit` mirror the request that produced the page
/// - `count` is the total across all pages; when absent, the footer
///   omits total/page-count
pub fn build_pagination_footer(meta: &CollectionMeta, shown: usize) -> Option<String> {
    let limit = meta.limit.filter(|limit| *limit > 0)?;
    let offset = meta.offset.unwrap_or(0);

    let start = offset.saturating_add(1);
    let end = offset.saturating_add(shown as u64);
    let page = (offset / limit).saturating_add(1);

    match meta.count {
        Some(count) => {
            let total_pages = if count == 0 {
                0
            } else {
                count.saturating_add(limit).saturating_sub(1) / limit
            };
            Some(format!(
                "Showing {}-{} of {} (page {} of {})",
                start, end, count, page, total_pages
            ))
        }
        None => Some(format!("Showing {}-{} (page {})", start, end, page)),
    }
}
