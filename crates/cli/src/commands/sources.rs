//! Sources command implementation.
//!
//! Responsibilities:
//! - List sources with pagination and an optional type filter.
//! - Show a source together with its endpoint and authentication.
//! - Add, update, and remove sources through the multi-step flows.
//! - Format output via shared formatters.
//!
//! Does NOT handle:
//! - Request sequencing inside the flows (see the client crate).
//! - Output formatting details (see formatters module).
//!
//! Invariants:
//! - Remove operations require confirmation unless --force is used.
//! - An update resubmits the loaded records' values for any flag the user
//!   did not pass, so untouched fields keep their current state.
//! - Passwords are handled via SecretString and never echoed back.

use anyhow::Result;
use clap::Subcommand;
use secrecy::SecretString;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter, output_result};
use sources_client::{
    FlowError, ListSourcesParams, SourceDetail, SourceForm, create_source_flow, endpoint_url,
    load_source_for_edit, remove_source, update_source_flow,
};
use sources_config::constants::DEFAULT_PER_PAGE;

#[derive(Debug, Subcommand)]
pub enum SourcesCommand {
    /// List sources (default)
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Number of sources per page
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u64,

        /// Restrict the list to one source type name (e.g. amazon)
        #[arg(long)]
        source_type: Option<String>,
    },
    /// Show a source with its endpoint and authentication
    Show {
        /// Source id
        id: String,
    },
    /// Add a source with its endpoint and authentication
    Add {
        /// Display name for the new source
        #[arg(long)]
        name: String,

        /// Source type name from the catalog (e.g. amazon, openshift)
        #[arg(long)]
        source_type: String,

        /// Endpoint URL (scheme://host:port/path)
        #[arg(long)]
        url: Option<String>,

        /// Endpoint role
        #[arg(long)]
        role: Option<String>,

        /// Username for the authentication record
        #[arg(short, long)]
        username: Option<String>,

        /// Password or secret key for the authentication record
        #[arg(short, long)]
        password: Option<String>,

        /// Authentication type (e.g. access_key_secret_key)
        #[arg(long)]
        authtype: Option<String>,

        /// Verify TLS certificates on the endpoint
        #[arg(long)]
        verify_ssl: bool,

        /// CA certificate for the endpoint
        #[arg(long)]
        certificate_authority: Option<String>,
    },
    /// Update a source, its endpoint, and its authentication
    Update {
        /// Source id
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New endpoint URL (scheme://host:port/path)
        #[arg(long)]
        url: Option<String>,

        /// New username for the authentication record
        #[arg(short, long)]
        username: Option<String>,

        /// New password or secret key for the authentication record
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Delete a source
    Remove {
        /// Source id
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(
    config: sources_config::Config,
    command: SourcesCommand,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
) -> Result<()> {
    match command {
        SourcesCommand::List {
            page,
            per_page,
            source_type,
        } => run_list(config, page, per_page, source_type, output_format, output_file).await,
        SourcesCommand::Show { id } => run_show(config, &id, output_format, output_file).await,
        SourcesCommand::Add {
            name,
            source_type,
            url,
            role,
            username,
            password,
            authtype,
            verify_ssl,
            certificate_authority,
        } => {
            let form = SourceForm {
                source_name: name,
                source_type,
                url,
                role,
                user_name: username,
                password: password.map(|p| SecretString::new(p.into())),
                authtype,
                verify_ssl: verify_ssl.then_some(true),
                certificate_authority,
                ..SourceForm::default()
            };
            run_add(config, form).await
        }
        SourcesCommand::Update {
            id,
            name,
            url,
            username,
            password,
        } => run_update(config, &id, name, url, username, password).await,
        SourcesCommand::Remove { id, force } => run_remove(config, &id, force).await,
    }
}

async fn run_list(
    config: sources_config::Config,
    page: u64,
    per_page: u64,
    source_type: Option<String>,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
) -> Result<()> {
    info!("Listing sources");

    let client = crate::commands::build_client(&config)?;

    // The catalog resolves both the optional type-name filter and the type
    // column in the rendered table.
    let types = client.list_source_types().await?.data;
    let source_type_id = match source_type.as_deref() {
        Some(name) => Some(
            types
                .iter()
                .find(|t| t.name == name)
                .map(|t| t.id.clone())
                .ok_or_else(|| FlowError::UnknownSourceType(name.to_string()))?,
        ),
        None => None,
    };

    let params = ListSourcesParams {
        source_type_id,
        limit: Some(per_page),
        offset: Some(page.saturating_sub(1) * per_page),
    };
    let collection = client.list_sources(&params).await?;

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_sources(&collection.data, &types, collection.meta.as_ref())?;
    output_result(&output, format, output_file.as_ref())?;

    Ok(())
}

async fn run_show(
    config: sources_config::Config,
    id: &str,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
) -> Result<()> {
    info!("Showing source: {}", id);

    let client = crate::commands::build_client(&config)?;

    let detail = load_source_for_edit(&client, id).await?;

    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = formatter.format_source_detail(&detail)?;
    output_result(&output, format, output_file.as_ref())?;

    Ok(())
}

async fn run_add(config: sources_config::Config, form: SourceForm) -> Result<()> {
    info!("Adding source: {}", form.source_name);

    let client = crate::commands::build_client(&config)?;

    let types = client.list_source_types().await?.data;
    create_source_flow(&client, &form, &types).await?;

    println!("Source '{}' was added successfully.", form.source_name);
    Ok(())
}

async fn run_update(
    config: sources_config::Config,
    id: &str,
    name: Option<String>,
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    info!("Updating source: {}", id);

    let client = crate::commands::build_client(&config)?;

    let detail = load_source_for_edit(&client, id).await?;

    let mut form = form_from_detail(&detail);
    if let Some(name) = name {
        form.source_name = name;
    }
    if let Some(url) = url {
        form.url = Some(url);
    }
    if let Some(username) = username {
        form.user_name = Some(username);
    }
    if let Some(password) = password {
        form.password = Some(SecretString::new(password.into()));
    }

    update_source_flow(&client, &detail, &form).await?;

    println!("Source '{}' was updated successfully.", form.source_name);
    Ok(())
}

async fn run_remove(config: sources_config::Config, id: &str, force: bool) -> Result<()> {
    if !force && !crate::interactive::confirm_delete(id, "source")? {
        return Ok(());
    }

    info!("Removing source: {}", id);

    let client = crate::commands::build_client(&config)?;

    remove_source(&client, id).await?;

    println!("Source '{}' was removed successfully.", id);
    Ok(())
}

/// Build a form carrying the loaded records' current values.
///
/// The update chain resubmits the whole form, so flags the user leaves out
/// must carry the existing values or they would wipe the fields they stand
/// for. The password stays unset: the service never returns one and an
/// absent password means the current secret is kept.
fn form_from_detail(detail: &SourceDetail) -> SourceForm {
    let endpoint = detail.endpoint.as_ref();
    SourceForm {
        source_name: detail.source.name.clone(),
        url: endpoint.map(endpoint_url),
        verify_ssl: endpoint.and_then(|e| e.verify_ssl),
        certificate_authority: endpoint.and_then(|e| e.certificate_authority.clone()),
        user_name: detail
            .authentication
            .as_ref()
            .and_then(|auth| auth.username.clone()),
        ..SourceForm::default()
    }
}
