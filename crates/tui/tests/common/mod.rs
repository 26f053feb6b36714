//! Common test utilities for TUI side effects tests.
//!
//! This module provides shared helper functions and types for testing the
//! TUI's async side effect handlers. It uses wiremock to mock HTTP
//! responses from the Sources REST API.
//!
//! # Invariants
//! - Fixtures are loaded from the client's fixtures directory
//! - All mock servers use random available ports to avoid conflicts
//! - Each test gets its own isolated mock server and action channel
//!
//! # What this does NOT handle
//! - Actual HTTP requests to real servers
//! - TUI rendering or terminal management

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

// Re-export commonly used types for test convenience
pub use sources_client::testing::load_fixture;
pub use sources_client::{IdentityStrategy, SourcesClient};
pub use sources_tui::action::Action;
pub use sources_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness for side effects testing.
///
/// Provides a mock HTTP server, action channel, shared client, and task
/// tracker for testing async side effect handlers in isolation.
pub struct SideEffectsTestHarness {
    /// The mock HTTP server for intercepting API calls
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Shared client pointing to the mock server
    pub client: SharedClient,
    /// Tracker the handlers spawn their tasks on
    pub task_tracker: TaskTracker,
}

impl SideEffectsTestHarness {
    /// Create a new test harness with a mock server and fresh channels.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);

        let client = create_test_client(&mock_server.uri());
        let task_tracker = TaskTracker::new();

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker,
        }
    }

    /// Handle an action and collect all resulting actions.
    ///
    /// Calls `handle_side_effects` directly under a short timeout (to catch
    /// blocking behavior), then collects all actions sent by spawned tasks
    /// until `timeout_secs` elapses.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let client = self.client.clone();
        let tx = self.action_tx.clone();
        let task_tracker = self.task_tracker.clone();

        let handle_future = handle_side_effects(action, client, tx, task_tracker);
        match tokio::time::timeout(tokio::time::Duration::from_millis(100), handle_future).await {
            Ok(()) => {}
            Err(_) => {
                panic!(
                    "handle_side_effects timed out - it may be blocking on network I/O instead of spawning tasks"
                );
            }
        }

        // Give spawned tasks a chance to start without real-time delay
        tokio::task::yield_now().await;

        // Collect actions until timeout
        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);

        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break, // Channel closed
                Err(_) => {
                    // Timeout - check if there are any pending tasks
                    tokio::task::yield_now().await;
                }
            }
        }

        actions
    }
}

/// Create a test client pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = SourcesClient::builder()
        .api_base(mock_uri.to_string())
        .identity(IdentityStrategy::Account {
            account_number: "100010".to_string(),
        })
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");

    Arc::new(client)
}
