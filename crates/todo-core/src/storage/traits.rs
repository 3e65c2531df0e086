//! Item store trait definition.
//!
//! The `ItemStore` trait is the contract every backend must satisfy.
//! The in-memory and SQLite stores must be interchangeable behind it: the
//! only permitted difference is the order `list_items` returns.

use super::types::{Item, ItemPatch, NewItem};
use crate::error::Result;

/// Storage interface for todo items.
///
/// All implementations must ensure:
/// - Ids are assigned by the store and never reused, even after deletion
/// - Updates are merges: absent patch fields leave stored values alone
/// - Missing ids are reported as `None`/`false`, never as errors
pub trait ItemStore: Send {
    /// List every existing item.
    ///
    /// Ordering is backend-defined: insertion order for the in-memory store,
    /// newest first for the SQLite store.
    fn list_items(&self) -> Result<Vec<Item>>;

    /// Get an item by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(item))` if found, `Ok(None)` if not found.
    fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Insert a new item.
    ///
    /// # Returns
    ///
    /// Returns the stored item, including its freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if the title is empty, and
    /// `TodoError::Storage` if the backend did not produce an id.
    fn create_item(&mut self, item: &NewItem) -> Result<Item>;

    /// Apply a partial update.
    ///
    /// An empty patch performs no write and returns the current item.
    ///
    /// # Returns
    ///
    /// Returns the full item after the merge, or `Ok(None)` if not found.
    fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<Option<Item>>;

    /// Delete an item.
    ///
    /// # Returns
    ///
    /// Returns `true` if an item was removed, `false` if none had that id.
    fn delete_item(&mut self, id: &str) -> Result<bool>;
}
