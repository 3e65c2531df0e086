//! Application-level utilities for the Todo CLI.
//!
//! This module provides:
//! - Path resolution for config and database files
//! - Store selection and lifecycle

mod context;
mod resolver;

// Re-export public API
pub use context::{AppContext, StoreHandle};
pub use resolver::{item_not_found, resolve_config_path};
