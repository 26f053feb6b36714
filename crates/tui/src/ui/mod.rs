//! UI rendering modules for the TUI.

pub mod popup;
pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use theme::Theme;
pub use toast::{Toast, ToastLevel};
