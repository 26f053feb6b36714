//! Side effect dispatcher.
//!
//! This module contains the main `handle_side_effects` function that routes
//! actions to their handler functions in submodules.

use crate::action::Action;
use crate::runtime::side_effects::{SharedClient, TaskTracker, sources};
use std::time::Instant;
use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

/// Handle side effects (async API calls) for actions.
///
/// Spawns background tasks for API operations and sends results back
/// through the action channel. Actions with no side effect fall through
/// without doing anything.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, task_tracker).await;

        // Record duration at the end
        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no sensitive data).
fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::Input(_) => "Input",
        Action::Resize(..) => "Resize",
        Action::Tick => "Tick",
        Action::Quit => "Quit",
        Action::Loading(_) => "Loading",
        Action::LoadSources => "LoadSources",
        Action::SourcesLoaded(_) => "SourcesLoaded",
        Action::LoadSourceTypes => "LoadSourceTypes",
        Action::SourceTypesLoaded(_) => "SourceTypesLoaded",
        Action::LoadSourceForEdit { .. } => "LoadSourceForEdit",
        Action::SourceForEditLoaded(_) => "SourceForEditLoaded",
        Action::OpenAddSourceWizard => "OpenAddSourceWizard",
        Action::ClosePopup => "ClosePopup",
        Action::SubmitSourceCreate { .. } => "SubmitSourceCreate",
        Action::SubmitSourceUpdate { .. } => "SubmitSourceUpdate",
        Action::RemoveSource { .. } => "RemoveSource",
        Action::SourceRemoved(_) => "SourceRemoved",
        Action::NextPage => "NextPage",
        Action::PreviousPage => "PreviousPage",
        Action::Notify(..) => "Notify",
    }
}

async fn handle_action(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    match action {
        Action::LoadSources => {
            sources::handle_load_sources(client, tx, task_tracker.clone()).await;
        }
        Action::LoadSourceTypes => {
            sources::handle_load_source_types(client, tx, task_tracker.clone()).await;
        }
        Action::LoadSourceForEdit { source_id } => {
            sources::handle_load_source_for_edit(client, tx, task_tracker.clone(), source_id)
                .await;
        }
        Action::SubmitSourceCreate { form, source_types } => {
            sources::handle_submit_source_create(
                client,
                tx,
                task_tracker.clone(),
                form,
                source_types,
            )
            .await;
        }
        Action::SubmitSourceUpdate { detail, form } => {
            sources::handle_submit_source_update(client, tx, task_tracker.clone(), detail, form)
                .await;
        }
        Action::RemoveSource {
            source_id,
            source_name,
        } => {
            sources::handle_remove_source(
                client,
                tx,
                task_tracker.clone(),
                source_id,
                source_name,
            )
            .await;
        }
        // Everything else is pure state and has no side effect.
        _ => {}
    }
}
