//! Testing utilities for Sources client tests.
//!
//! Provides helpers for loading JSON fixtures used by unit and integration
//! tests. Available when running tests or when the `test-utils` feature is
//! enabled.
//!
//! # Example
//! ```ignore
//! use sources_client::testing::load_fixture;
//!
//! let fixture = load_fixture("sources/list_sources.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "sources/list_sources.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
