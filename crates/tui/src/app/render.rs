//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer).
//! - Overlay the active popup and toasts.
//!
//! Non-responsibilities:
//! - Does NOT handle input.
//! - Does NOT mutate app state (except for table selection).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::popup::render_popup;
use crate::ui::screens::sources::{SourcesRenderConfig, render_sources};
use crate::ui::theme::spinner_char;
use crate::ui::toast::render_toasts;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(FOOTER_HEIGHT),
                ]
                .as_ref(),
            )
            .split(f.area());

        let theme = self.theme;

        // Header
        let mut title_spans = vec![
            Span::styled("Sources", theme.title()),
            Span::raw(" | "),
            Span::styled(self.summary_line(), theme.text()),
        ];
        if self.loading {
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled(
                spinner_char(self.spinner_frame).to_string(),
                theme.highlight(),
            ));
        }
        let header = Paragraph::new(vec![
            Line::from(title_spans),
            Line::styled(self.format_connection_context(), theme.text_dim()),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(header, chunks[0]);

        // Main content
        let Self {
            loading,
            sources,
            sources_state,
            source_types,
            page,
            per_page,
            spinner_frame,
            ..
        } = self;
        render_sources(
            f,
            chunks[1],
            SourcesRenderConfig {
                loading: *loading,
                sources: sources.as_deref(),
                source_types: source_types.as_deref(),
                state: sources_state,
                page: *page,
                per_page: *per_page,
                spinner_frame: *spinner_frame,
                theme: &theme,
            },
        );

        // Footer
        let footer = Paragraph::new(
            "q: quit | r: refresh | a: add | e: edit | d: delete | ↑/↓: select | ←/→: page",
        )
        .style(theme.text_dim())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(footer, chunks[2]);

        // Popup overlay
        if let Some(popup) = &self.popup {
            render_popup(f, popup, self.source_types.as_deref(), &theme);
        }

        // Toasts render last so they sit above everything else
        render_toasts(f, &self.toasts, &theme);
    }

    fn summary_line(&self) -> String {
        match &self.sources {
            Some(sources) => format!("{} sources", sources.len()),
            None => "not loaded".to_string(),
        }
    }

    fn format_connection_context(&self) -> String {
        match &self.connection.account_number {
            Some(account) => format!("{} | account {}", self.connection.base_path, account),
            None => format!("{} | anonymous", self.connection.base_path),
        }
    }
}
