//! Source-related side effect handlers.
//!
//! Responsibilities:
//! - Handle async API calls for source operations.
//! - Fetch the source list and the source type catalog.
//! - Run the create, update, and remove chains.
//!
//! Does NOT handle:
//! - Direct state modification (sends actions for that).
//! - UI rendering.

use crate::action::Action;
use crate::ui::ToastLevel;
use sources_client::{
    ListSourcesParams, SourceDetail, SourceForm, SourceType, create_source_flow,
    load_source_for_edit, remove_source, update_source_flow,
};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};

/// Handle loading the source list.
pub async fn handle_load_sources(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let _ = tx.send(Action::Loading(true)).await;
    task_tracker.spawn(async move {
        match client.list_sources(&ListSourcesParams::default()).await {
            Ok(collection) => {
                let _ = tx.send(Action::SourcesLoaded(Ok(collection.data))).await;
            }
            Err(e) => {
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Error,
                        format!("Failed to load sources: {}", e),
                    ))
                    .await;
                let _ = tx.send(Action::SourcesLoaded(Err(Arc::new(e)))).await;
            }
        }
    });
}

/// Handle loading the source type catalog.
///
/// Does not touch the loading flag. The catalog loads alongside the
/// source list at startup and the list load already owns the spinner.
pub async fn handle_load_source_types(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    task_tracker.spawn(async move {
        match client.list_source_types().await {
            Ok(collection) => {
                let _ = tx
                    .send(Action::SourceTypesLoaded(Ok(collection.data)))
                    .await;
            }
            Err(e) => {
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Error,
                        format!("Failed to load source types: {}", e),
                    ))
                    .await;
                let _ = tx
                    .send(Action::SourceTypesLoaded(Err(Arc::new(e))))
                    .await;
            }
        }
    });
}

/// Handle loading a source with its endpoint and authentication for the
/// edit wizard.
pub async fn handle_load_source_for_edit(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    source_id: String,
) {
    let _ = tx.send(Action::Loading(true)).await;
    task_tracker.spawn(async move {
        match load_source_for_edit(&client, &source_id).await {
            Ok(detail) => {
                let _ = tx
                    .send(Action::SourceForEditLoaded(Ok(Box::new(detail))))
                    .await;
            }
            Err(e) => {
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Error,
                        format!("Failed to load source for editing: {}", e),
                    ))
                    .await;
                let _ = tx
                    .send(Action::SourceForEditLoaded(Err(Arc::new(e))))
                    .await;
            }
        }
    });
}

/// Handle creating a new source with its endpoint and authentication.
pub async fn handle_submit_source_create(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    form: Box<SourceForm>,
    source_types: Vec<SourceType>,
) {
    let _ = tx.send(Action::Loading(true)).await;
    task_tracker.spawn(async move {
        match create_source_flow(&client, &form, &source_types).await {
            Ok(_) => {
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Success,
                        format!("Source '{}' was added successfully", form.source_name),
                    ))
                    .await;
            }
            Err(e) => {
                let _ = tx
                    .send(Action::Notify(ToastLevel::Error, e.to_string()))
                    .await;
            }
        }
        // Refresh the list either way. A mid-chain failure can leave a
        // partially created source behind and the list should show it.
        let _ = tx.send(Action::LoadSources).await;
    });
}

/// Handle updating a source, its endpoint, and its authentication.
pub async fn handle_submit_source_update(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    detail: Box<SourceDetail>,
    form: Box<SourceForm>,
) {
    let _ = tx.send(Action::Loading(true)).await;
    task_tracker.spawn(async move {
        match update_source_flow(&client, &detail, &form).await {
            Ok(()) => {
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Success,
                        format!("Source '{}' was updated successfully", form.source_name),
                    ))
                    .await;
            }
            Err(e) => {
                let _ = tx
                    .send(Action::Notify(ToastLevel::Error, e.to_string()))
                    .await;
            }
        }
        // Refresh the list either way so partial updates become visible.
        let _ = tx.send(Action::LoadSources).await;
    });
}

/// Handle deleting a source.
pub async fn handle_remove_source(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    source_id: String,
    source_name: String,
) {
    let _ = tx.send(Action::Loading(true)).await;
    task_tracker.spawn(async move {
        match remove_source(&client, &source_id).await {
            Ok(()) => {
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Success,
                        format!("Source '{}' was removed successfully", source_name),
                    ))
                    .await;
                let _ = tx.send(Action::SourceRemoved(Ok(source_id))).await;
                // Refresh the source list
                let _ = tx.send(Action::LoadSources).await;
            }
            Err(e) => {
                let _ = tx
                    .send(Action::Notify(ToastLevel::Error, e.to_string()))
                    .await;
                let _ = tx.send(Action::SourceRemoved(Err(Arc::new(e)))).await;
                let _ = tx.send(Action::Loading(false)).await;
            }
        }
    });
}
