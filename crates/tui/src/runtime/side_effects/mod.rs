//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Handle async API calls triggered by user actions.
//! - Spawn background tasks for data fetching to avoid blocking the UI.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//! - Configuration loading.
//!
//! Invariants:
//! - All API calls are spawned as separate tokio tasks on the tracker.
//! - Results are always sent back via the action channel.
//! - The loading flag is set before API calls and cleared by the result
//!   action (or an explicit `Loading(false)` on paths with no reload).

// Core types
mod types;

// Action dispatcher
mod dispatcher;

// Domain-specific handlers
mod sources;

// Re-export public API
pub use dispatcher::handle_side_effects;
pub use types::{SharedClient, TaskTracker};
