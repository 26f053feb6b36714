//! Centralized constants for the Sources TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// API Base Path
// =============================================================================

/// Version segment appended to every resolved API base.
pub const API_VERSION: &str = "v0.1";

/// Microservice path appended when the configured base path does not end
/// with a slash. A trailing slash means the base already points directly at
/// the service (local development against a bare inventory API).
pub const SERVICE_PATH: &str = "/topological-inventory";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// List Pagination Defaults
// =============================================================================

/// Default page size for the sources list.
pub const DEFAULT_PER_PAGE: u64 = 10;

// =============================================================================
// TUI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;
