//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying items
//! as JSON or as human-readable text.

mod json;
mod text;

// Re-export public API
pub use json::{item_json, items_json, print_json};
pub use text::{print_item, print_item_list};
