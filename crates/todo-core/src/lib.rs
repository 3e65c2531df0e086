//! # Todo Core
//!
//! Core library for a small todo-item service.
//!
//! This crate provides the item model, the storage abstraction with its
//! in-memory and SQLite backends, and a framework-free request boundary
//! that maps HTTP-style requests onto store calls.
//!
//! ## Architecture
//!
//! - **storage**: `ItemStore` trait, item types, payload validation, backends
//! - **api**: request routing and status/body mapping for the store contract
//! - **error**: the error hierarchy shared by every layer

pub mod api;
pub mod error;
pub mod storage;

pub use error::{Result, TodoError};
pub use storage::{Item, ItemPatch, ItemStore, MemoryItemStore, NewItem, SqliteItemStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
