//! Empty state widget for TUI screens.
//!
//! Provides a consistent empty state display for screens whose data set
//! has not been loaded yet or came back with no records.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render an empty state widget with a custom message.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `area` - The area to render within
/// * `title` - The title for the widget border (e.g., "No Sources")
/// * `message` - The message to display inside the border
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let placeholder = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}
