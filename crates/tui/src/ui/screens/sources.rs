//! Sources screen rendering.
//!
//! Renders the paginated source table with its loading and empty states.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use sources_client::{Source, SourceType};

use crate::ui::theme::Theme;
use crate::ui::widgets::{render_empty_state, render_loading_state};

/// Title of the empty state shown before any source exists.
pub const EMPTY_STATE_TITLE: &str = "No Sources";

/// Body of the empty state shown before any source exists.
pub const EMPTY_STATE_MESSAGE: &str =
    "No Sources have been defined. To start define a Source.\n\nPress 'a' to Add a Source.";

/// Configuration for rendering the sources screen.
pub struct SourcesRenderConfig<'a> {
    /// Whether data is currently loading
    pub loading: bool,
    /// The full list of sources to display
    pub sources: Option<&'a [Source]>,
    /// The source type catalog used to resolve type labels
    pub source_types: Option<&'a [SourceType]>,
    /// The current table selection state
    pub state: &'a mut TableState,
    /// Zero-based page to display
    pub page: usize,
    /// Number of rows per page
    pub per_page: usize,
    /// Current spinner frame for loading animation
    pub spinner_frame: u8,
    /// Theme for consistent styling
    pub theme: &'a Theme,
}

/// Render the sources screen.
///
/// Shows a loading spinner until the first load completes, the empty
/// state when no sources exist, and otherwise one page of the table.
pub fn render_sources(f: &mut Frame, area: Rect, config: SourcesRenderConfig) {
    let SourcesRenderConfig {
        loading,
        sources,
        source_types,
        state,
        page,
        per_page,
        spinner_frame,
        theme,
    } = config;

    if loading && sources.is_none() {
        render_loading_state(f, area, "Sources", "Loading sources...", spinner_frame);
        return;
    }

    let sources = match sources {
        Some(s) if !s.is_empty() => s,
        _ => {
            render_empty_state(f, area, EMPTY_STATE_TITLE, EMPTY_STATE_MESSAGE);
            return;
        }
    };

    let total_pages = sources.len().div_ceil(per_page).max(1);
    let start = (page * per_page).min(sources.len().saturating_sub(1));
    let end = (start + per_page).min(sources.len());
    let visible = &sources[start..end];

    let header_cells = ["Name", "Type", "Date added"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header()));
    let header = Row::new(header_cells).height(1);

    let rows = visible.iter().map(|source| {
        let cells = vec![
            Cell::from(source.name.as_str()),
            Cell::from(type_label(source_types, source)),
            Cell::from(date_added(source)),
        ];
        Row::new(cells)
    });

    let title = format!(
        "Sources ({}) - page {}/{}",
        sources.len(),
        page + 1,
        total_pages
    );
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45), // Name
            Constraint::Percentage(35), // Type
            Constraint::Percentage(20), // Date added
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border())
            .title_style(theme.title()),
    )
    .row_highlight_style(theme.highlight())
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, state);
}

/// Resolve the product name of a source's type, falling back to the raw id.
fn type_label(source_types: Option<&[SourceType]>, source: &Source) -> String {
    source_types
        .and_then(|types| types.iter().find(|t| t.id == source.source_type_id))
        .map(|t| t.product_name.clone().unwrap_or_else(|| t.name.clone()))
        .unwrap_or_else(|| source.source_type_id.clone())
}

fn date_added(source: &Source) -> String {
    source
        .created_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
