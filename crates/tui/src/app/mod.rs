//! Application state and behavior.
//!
//! Responsibilities:
//! - Hold the full TUI state in the `App` struct.
//! - Reduce actions into state changes (`update`).
//! - Translate keyboard input into actions (`handle_input`).
//! - Render the state into a frame (`render`).
//!
//! Does NOT handle:
//! - Async API calls (see `runtime::side_effects`).
//! - Terminal setup and teardown (see `runtime::terminal`).

mod core;
mod input;
mod render;
mod update;

pub use core::{App, ConnectionContext, FOOTER_HEIGHT, HEADER_HEIGHT};
