//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide shared helpers for interactive user prompts.
//! - Handle stdin/stdout interactions safely.

use anyhow::Result;
use std::io::Write;

/// Prompt the user for delete confirmation.
///
/// Displays a confirmation prompt asking if the user wants to delete the
/// specified item. Returns `true` if the user confirms (enters 'y' or 'Y'),
/// `false` otherwise.
pub fn confirm_delete(item_name: &str, item_type: &str) -> Result<bool> {
    print!(
        "Are you sure you want to delete {} '{}'? [y/N] ",
        item_type, item_name
    );
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if !input.trim().eq_ignore_ascii_case("y") {
        println!("Delete cancelled.");
        return Ok(false);
    }

    Ok(true)
}
