//! Shared types for side effect handlers.
//!
//! This module contains type aliases and shared definitions used across
//! the side effect handler submodules.

use sources_client::SourcesClient;
use std::sync::Arc;

pub use tokio_util::task::TaskTracker;

/// Shared client for async tasks.
///
/// Every `SourcesClient` call takes `&self` and the identity header is
/// fixed at build time, so spawned tasks share one instance behind a
/// plain `Arc` with no lock.
pub type SharedClient = Arc<SourcesClient>;
