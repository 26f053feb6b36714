//! Endpoints command implementation.
//!
//! Endpoints are listed across sources here; creating and updating them
//! happens through the source flows, never directly.

use anyhow::Result;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: sources_config::Config,
    source_ids: Vec<String>,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
) -> Result<()> {
    info!("Listing endpoints");

    let client = crate::commands::build_client(&config)?;

    let endpoints = client.list_endpoints(&source_ids).await?.data;

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_endpoints(&endpoints)?;
    output_result(&output, format, output_file.as_ref())?;

    Ok(())
}
