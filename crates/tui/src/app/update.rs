//! State reducer for the TUI app.
//!
//! `App::update` applies one action to the state. It never performs I/O;
//! actions with side effects are handled by `runtime::side_effects` and
//! report back through `*Loaded` and `*Removed` actions.

use std::sync::Arc;

use sources_client::{ClientError, Source, SourceDetail, SourceType};

use crate::action::Action;
use crate::app::App;
use crate::ui::Toast;
use crate::ui::popup::{Popup, PopupType};

impl App {
    /// Apply an action to the application state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => self.on_tick(),
            Action::Loading(value) => self.loading = value,
            Action::SourcesLoaded(result) => self.on_sources_loaded(result),
            Action::SourceTypesLoaded(result) => self.on_source_types_loaded(result),
            Action::SourceForEditLoaded(result) => self.on_source_for_edit_loaded(result),
            Action::OpenAddSourceWizard => {
                self.popup = Some(Popup::builder(PopupType::add_wizard()).build());
            }
            Action::ClosePopup => self.popup = None,
            // Submissions close their popup; the outcome arrives as toasts
            // and a list reload.
            Action::SubmitSourceCreate { .. }
            | Action::SubmitSourceUpdate { .. }
            | Action::RemoveSource { .. } => {
                self.popup = None;
            }
            Action::SourceRemoved(_) => {}
            Action::NextPage => self.on_next_page(),
            Action::PreviousPage => self.on_previous_page(),
            Action::Notify(level, message) => self.toasts.push(Toast::new(message, level)),
            Action::Input(_)
            | Action::Resize(..)
            | Action::Quit
            | Action::LoadSources
            | Action::LoadSourceTypes
            | Action::LoadSourceForEdit { .. } => {}
        }
    }

    fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.toasts.retain(|toast| !toast.is_expired());
    }

    fn on_sources_loaded(&mut self, result: Result<Vec<Source>, Arc<ClientError>>) {
        self.loading = false;
        match result {
            Ok(sources) => {
                self.sources = Some(sources);
                self.clamp_page_and_selection();
            }
            Err(err) => {
                tracing::warn!(error = %err, "sources load failed");
            }
        }
    }

    fn on_source_types_loaded(&mut self, result: Result<Vec<SourceType>, Arc<ClientError>>) {
        match result {
            Ok(types) => self.source_types = Some(types),
            Err(err) => {
                tracing::warn!(error = %err, "source types load failed");
            }
        }
    }

    fn on_source_for_edit_loaded(&mut self, result: Result<Box<SourceDetail>, Arc<ClientError>>) {
        self.loading = false;
        match result {
            Ok(detail) => {
                self.popup = Some(Popup::builder(PopupType::edit_wizard(detail)).build());
            }
            Err(err) => {
                tracing::warn!(error = %err, "edit data load failed");
            }
        }
    }

    fn on_next_page(&mut self) {
        if self.page + 1 < self.total_pages() {
            self.page += 1;
            self.sources_state.select(Some(0));
        }
    }

    fn on_previous_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.sources_state.select(Some(0));
        }
    }

    /// Keep the page and cursor valid after the list shrinks or grows.
    fn clamp_page_and_selection(&mut self) {
        let total = self.total_pages();
        if self.page >= total {
            self.page = total - 1;
        }
        let len = self.visible_sources().len();
        let selected = self.sources_state.selected().unwrap_or(0);
        if len == 0 {
            self.sources_state.select(Some(0));
        } else if selected >= len {
            self.sources_state.select(Some(len - 1));
        }
    }
}
