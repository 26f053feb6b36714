//! Applications command implementation.
//!
//! Applications are read-only from this client's point of view: they are
//! listed to show what is attached to a source, never created or modified.

use anyhow::Result;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: sources_config::Config,
    source_ids: Vec<String>,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
) -> Result<()> {
    info!("Listing applications");

    let client = crate::commands::build_client(&config)?;

    let applications = client.list_applications(&source_ids).await?.data;

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_applications(&applications)?;
    output_result(&output, format, output_file.as_ref())?;

    Ok(())
}
