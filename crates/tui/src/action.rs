//! Action types driving the TUI state machine.
//!
//! Responsibilities:
//! - Define the `Action` enum consumed by `App::update` and the side
//!   effect dispatcher.
//!
//! Does NOT handle:
//! - State mutation (see `app`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - `*Loaded` variants carry `Result` payloads so failures travel the
//!   same path as data.
//! - Errors are wrapped in `Arc` so actions stay cheaply cloneable.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use sources_client::{ClientError, FlowError, Source, SourceDetail, SourceForm, SourceType};

use crate::ui::ToastLevel;

/// Actions that can be dispatched through the application channel.
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw keyboard input to be routed through `App::handle_input`
    Input(KeyEvent),
    /// Terminal was resized to (width, height)
    Resize(u16, u16),
    /// Periodic UI tick for spinner animation and toast expiry
    Tick,
    /// Exit the application
    Quit,
    /// Set the global loading flag
    Loading(bool),

    /// Fetch the full list of sources
    LoadSources,
    /// Sources fetch finished
    SourcesLoaded(Result<Vec<Source>, Arc<ClientError>>),
    /// Fetch the catalog of source types
    LoadSourceTypes,
    /// Source types fetch finished
    SourceTypesLoaded(Result<Vec<SourceType>, Arc<ClientError>>),
    /// Fetch a source with its endpoint and authentication for editing
    LoadSourceForEdit {
        source_id: String,
    },
    /// Edit data fetch finished
    SourceForEditLoaded(Result<Box<SourceDetail>, Arc<ClientError>>),

    /// Open the add source wizard popup
    OpenAddSourceWizard,
    /// Close whatever popup is open
    ClosePopup,

    /// Run the create chain for the form the wizard collected
    ///
    /// Carries the loaded source type catalog so the handler can resolve
    /// the chosen type name to an id without reaching into app state.
    SubmitSourceCreate {
        form: Box<SourceForm>,
        source_types: Vec<SourceType>,
    },
    /// Run the update chain for an edited source
    SubmitSourceUpdate {
        detail: Box<SourceDetail>,
        form: Box<SourceForm>,
    },
    /// Delete a source
    RemoveSource {
        source_id: String,
        source_name: String,
    },
    /// Source deletion finished
    SourceRemoved(Result<String, Arc<FlowError>>),

    /// Advance to the next page of the source list
    NextPage,
    /// Go back to the previous page of the source list
    PreviousPage,

    /// Push a toast notification
    Notify(ToastLevel, String),
}
