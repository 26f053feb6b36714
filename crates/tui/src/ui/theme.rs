//! TUI color theme and style helpers.
//!
//! This module defines the fixed color palette used across the TUI and
//! ergonomic helpers for building ratatui `Style` objects consistently.

use ratatui::style::{Color, Modifier, Style};

/// Spinner characters for animated loading indicator.
///
/// These Braille patterns create a smooth spinning animation when cycled.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// This helper handles the modulo operation to cycle through the spinner
/// characters.
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Color palette for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
        }
    }
}

impl Theme {
    /// Get the base text style.
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get dimmed text style.
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Get title style (accent + bold).
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style.
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get highlight/selection style.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get success style.
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style.
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get error style.
    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Get info style.
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get table header style.
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
