//! App struct definition and state helpers.

use ratatui::widgets::TableState;
use sources_client::{Source, SourceType};
use sources_config::constants::DEFAULT_PER_PAGE;

use crate::ui::Theme;
use crate::ui::Toast;
use crate::ui::popup::Popup;

/// Height of the header area, including borders.
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the footer area, including borders.
pub const FOOTER_HEIGHT: u16 = 3;

/// Connection information shown in the header.
#[derive(Debug, Clone, Default)]
pub struct ConnectionContext {
    /// The configured API base path
    pub base_path: String,
    /// The account number used for the identity header, if any
    pub account_number: Option<String>,
}

/// Main application state.
pub struct App {
    /// Whether an API call is in flight
    pub loading: bool,
    /// All sources, fetched in one request (None until the first load)
    pub sources: Option<Vec<Source>>,
    /// Table selection state for the visible page
    pub sources_state: TableState,
    /// Source type catalog for resolving type labels
    pub source_types: Option<Vec<SourceType>>,
    /// Zero-based page into `sources`
    pub page: usize,
    /// Rows shown per page
    pub per_page: usize,
    /// The currently open popup, if any
    pub popup: Option<Popup>,
    /// Active toast notifications
    pub toasts: Vec<Toast>,
    /// Animation frame for the loading spinner
    pub spinner_frame: u8,
    /// Color palette
    pub theme: Theme,
    /// Connection information for the header
    pub connection: ConnectionContext,
}

impl App {
    /// Create a new application with empty state.
    pub fn new(connection: ConnectionContext) -> Self {
        let mut sources_state = TableState::default();
        sources_state.select(Some(0));

        Self {
            loading: false,
            sources: None,
            sources_state,
            source_types: None,
            page: 0,
            per_page: DEFAULT_PER_PAGE as usize,
            popup: None,
            toasts: Vec::new(),
            spinner_frame: 0,
            theme: Theme::default(),
            connection,
        }
    }

    /// Number of pages the loaded source list spans (at least 1).
    pub fn total_pages(&self) -> usize {
        match &self.sources {
            Some(sources) => sources.len().div_ceil(self.per_page).max(1),
            None => 1,
        }
    }

    /// The slice of sources on the current page.
    pub fn visible_sources(&self) -> &[Source] {
        match &self.sources {
            Some(sources) => {
                let start = (self.page * self.per_page).min(sources.len());
                let end = (start + self.per_page).min(sources.len());
                &sources[start..end]
            }
            None => &[],
        }
    }

    /// The source under the table cursor, if any.
    pub fn selected_source(&self) -> Option<&Source> {
        let visible = self.visible_sources();
        self.sources_state
            .selected()
            .and_then(|index| visible.get(index))
    }

    /// Move the table cursor down one row, saturating at the page end.
    pub fn select_next_row(&mut self) {
        let len = self.visible_sources().len();
        if len == 0 {
            return;
        }
        let next = self
            .sources_state
            .selected()
            .map_or(0, |index| (index + 1).min(len - 1));
        self.sources_state.select(Some(next));
    }

    /// Move the table cursor up one row, saturating at the page start.
    pub fn select_previous_row(&mut self) {
        if self.visible_sources().is_empty() {
            return;
        }
        let previous = self
            .sources_state
            .selected()
            .map_or(0, |index| index.saturating_sub(1));
        self.sources_state.select(Some(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: &str) -> Source {
        Source {
            id: id.to_string(),
            name: format!("source-{id}"),
            source_type_id: "3".to_string(),
            uid: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_new_app_starts_on_first_page_with_selection() {
        let app = App::new(ConnectionContext::default());
        assert_eq!(app.page, 0);
        assert_eq!(app.per_page, 10);
        assert_eq!(app.sources_state.selected(), Some(0));
        assert!(app.sources.is_none());
        assert!(!app.loading);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut app = App::new(ConnectionContext::default());
        assert_eq!(app.total_pages(), 1);

        app.sources = Some((0..25).map(|i| source(&i.to_string())).collect());
        assert_eq!(app.total_pages(), 3);

        app.sources = Some((0..20).map(|i| source(&i.to_string())).collect());
        assert_eq!(app.total_pages(), 2);
    }

    #[test]
    fn test_visible_sources_slices_current_page() {
        let mut app = App::new(ConnectionContext::default());
        app.sources = Some((0..12).map(|i| source(&i.to_string())).collect());

        assert_eq!(app.visible_sources().len(), 10);
        app.page = 1;
        assert_eq!(app.visible_sources().len(), 2);
        assert_eq!(app.visible_sources()[0].id, "10");
    }

    #[test]
    fn test_selection_saturates_at_boundaries() {
        let mut app = App::new(ConnectionContext::default());
        app.sources = Some((0..3).map(|i| source(&i.to_string())).collect());

        app.select_previous_row();
        assert_eq!(app.sources_state.selected(), Some(0));

        app.select_next_row();
        app.select_next_row();
        app.select_next_row();
        app.select_next_row();
        assert_eq!(app.sources_state.selected(), Some(2));
    }

    #[test]
    fn test_selected_source_resolves_through_page() {
        let mut app = App::new(ConnectionContext::default());
        app.sources = Some((0..12).map(|i| source(&i.to_string())).collect());
        app.page = 1;
        app.sources_state.select(Some(1));

        assert_eq!(app.selected_source().map(|s| s.id.as_str()), Some("11"));
    }
}
