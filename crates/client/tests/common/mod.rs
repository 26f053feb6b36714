//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly
//! used types for testing the Sources client. All integration tests should
//! use these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from sources-client
#[allow(unused_imports)]
pub use sources_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use sources_client::{SourcesClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server, with no identity header.
#[allow(dead_code)]
pub fn client_for(mock_server: &MockServer) -> SourcesClient {
    SourcesClient::builder()
        .api_base(mock_server.uri())
        .build()
        .expect("client builds against mock server")
}
