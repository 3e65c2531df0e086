//! Storage layer for todo items.
//!
//! - `traits`: the `ItemStore` contract
//! - `types`: public item model and request types
//! - `validation`: payload checks and caller-facing messages
//! - `memory`: volatile, insertion-ordered backend
//! - `sqlite`: durable, newest-first backend

pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;
pub mod validation;

pub use memory::MemoryItemStore;
pub use sqlite::{ItemTimestamps, SqliteItemStore};
pub use traits::ItemStore;
pub use types::{Item, ItemPatch, NewItem};
