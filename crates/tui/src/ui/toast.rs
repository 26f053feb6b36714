//! Toast notification widgets for transient feedback messages.
//!
//! This module provides a toast notification system that displays transient
//! messages in the bottom-right corner of the screen. Each toast has a unique
//! UUID, a severity level, and an automatic expiration time (TTL).

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::FOOTER_HEIGHT;
use crate::ui::theme::Theme;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast
    pub id: Uuid,
    /// The message to display
    pub message: String,
    /// Severity level
    pub level: ToastLevel,
    /// When this toast was created
    pub created_at: Instant,
    /// Time-to-live before auto-expiry
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        let ttl = level.ttl();
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 5;

/// Width of a rendered toast, including borders.
const TOAST_WIDTH: u16 = 44;

/// Height of a rendered toast, including borders.
const TOAST_HEIGHT: u16 = 3;

/// Renders all active toasts in the bottom-right corner.
///
/// Toasts are stacked vertically with the most recent at the bottom.
/// Expired toasts are filtered out before rendering. Limited to
/// MAX_TOASTS to prevent screen overflow.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let area = f.area();
    let visible: Vec<&Toast> = toasts
        .iter()
        .filter(|t| !t.is_expired())
        .rev()
        .take(MAX_TOASTS)
        .collect();

    let width = TOAST_WIDTH.min(area.width);
    let x = area.width.saturating_sub(width);

    for (i, toast) in visible.iter().enumerate() {
        let offset = FOOTER_HEIGHT + TOAST_HEIGHT * (i as u16 + 1);
        if offset > area.height {
            break;
        }
        let toast_area = Rect {
            x,
            y: area.height - offset,
            width,
            height: TOAST_HEIGHT,
        };

        let border_style = match toast.level {
            ToastLevel::Info => theme.info(),
            ToastLevel::Success => theme.success(),
            ToastLevel::Warning => theme.warning(),
            ToastLevel::Error => theme.error(),
        };

        let widget = Paragraph::new(toast.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(toast.level.label())
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, toast_area);
        f.render_widget(widget, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_toast_levels_have_labels() {
        assert_eq!(ToastLevel::Info.label(), "INFO");
        assert_eq!(ToastLevel::Success.label(), "OK");
        assert_eq!(ToastLevel::Warning.label(), "WARN");
        assert_eq!(ToastLevel::Error.label(), "ERR");
    }

    #[test]
    fn test_error_toasts_outlive_info_toasts() {
        assert!(ToastLevel::Error.ttl() > ToastLevel::Info.ttl());
    }

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::error("Source creation failure.");
        assert!(!toast.is_expired());
        assert_eq!(toast.level, ToastLevel::Error);
    }

    #[test]
    fn test_toasts_have_unique_ids() {
        let a = Toast::info("one");
        let b = Toast::info("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_render_toasts_shows_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let toasts = vec![Toast::success("Source 'AWS production' added")];

        terminal
            .draw(|f| {
                render_toasts(f, &toasts, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content = buffer
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(content.contains("added"));
        assert!(content.contains("OK"));
    }
}
