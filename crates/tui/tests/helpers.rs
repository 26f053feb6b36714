//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! test fixtures for the TUI application.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sources_client::{Source, SourceType};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event.
pub fn backtab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Left arrow key event.
pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

/// Create a Right arrow key event.
pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Type a whole string as individual character key events.
pub fn type_str(s: &str) -> Vec<KeyEvent> {
    s.chars().map(key).collect()
}

/// Create a list of test sources.
pub fn create_test_sources(count: usize) -> Vec<Source> {
    (0..count)
        .map(|i| Source {
            id: format!("{}", 750 + i),
            name: format!("source-{}", i),
            source_type_id: "3".to_string(),
            uid: None,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

/// Create the source type catalog used across tests.
pub fn create_test_source_types() -> Vec<SourceType> {
    vec![
        SourceType {
            id: "1".to_string(),
            name: "openshift".to_string(),
            product_name: Some("OpenShift Container Platform".to_string()),
            vendor: Some("Red Hat".to_string()),
        },
        SourceType {
            id: "3".to_string(),
            name: "amazon".to_string(),
            product_name: Some("Amazon Web Services".to_string()),
            vendor: Some("Amazon".to_string()),
        },
    ]
}
