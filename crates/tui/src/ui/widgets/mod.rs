//! Reusable widgets shared across TUI screens.

mod empty;
mod loading;

pub use empty::render_empty_state;
pub use loading::render_loading_state;
