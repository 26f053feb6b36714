//! Loading state widget for TUI screens.
//!
//! Provides a consistent loading indicator with animated spinner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::spinner_char;

/// Render a loading state widget with spinner animation.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `area` - The area to render within
/// * `title` - The title for the widget border (e.g., "Sources")
/// * `message` - The loading message to display (e.g., "Loading sources...")
/// * `spinner_frame` - The current spinner animation frame
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    spinner_frame: u8,
) {
    let spinner = spinner_char(spinner_frame);
    let loading_widget = Paragraph::new(format!("{} {}", spinner, message))
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);
    f.render_widget(loading_widget, area);
}
