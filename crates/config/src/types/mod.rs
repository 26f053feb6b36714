//! Configuration type definitions for Sources TUI.
//!
//! Responsibilities:
//! - Define connection and identity configuration types.
//! - Resolve the versioned API base from a configured base path.
//!
//! Does NOT handle:
//! - Loading from environment variables or `.env` (see `loader` module).
//! - Actual network connections or identity headers (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `resolve_api_base` is the single place the version segment is applied.

mod connection;
mod identity;

pub use connection::{Config, ConnectionConfig, resolve_api_base};
pub use identity::IdentityConfig;
