//! Application types command implementation.
//!
//! The catalog is read-only: the service seeds it and clients only list it.

use anyhow::Result;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: sources_config::Config,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
) -> Result<()> {
    info!("Listing application types");

    let client = crate::commands::build_client(&config)?;

    let app_types = client.list_application_types().await?.data;

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_application_types(&app_types)?;
    output_result(&output, format, output_file.as_ref())?;

    Ok(())
}
