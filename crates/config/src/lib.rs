//! Configuration management for Sources TUI.
//!
//! This crate provides types and loaders for resolving the Sources API
//! target and identity settings from command-line overrides, environment
//! variables, and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig, IdentityConfig, resolve_api_base};
