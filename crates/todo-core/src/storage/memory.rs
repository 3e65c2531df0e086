//! In-memory item store.
//!
//! Volatile: contents live as long as the store value. Items are kept in
//! insertion order and ids come from a private counter, so separate
//! instances never share state.

use tracing::debug;

use crate::error::Result;
use crate::storage::traits::ItemStore;
use crate::storage::types::{Item, ItemPatch, NewItem};
use crate::storage::validation::ensure_title;

/// Volatile store backed by a `Vec`.
#[derive(Debug)]
pub struct MemoryItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for MemoryItemStore {
    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn get_item(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.position(id).map(|idx| self.items[idx].clone()))
    }

    fn create_item(&mut self, item: &NewItem) -> Result<Item> {
        ensure_title(&item.title)?;

        let created = Item {
            id: self.next_id.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            is_important: item.is_important,
        };
        self.next_id += 1;
        self.items.push(created.clone());

        debug!(id = %created.id, "created item");
        Ok(created)
    }

    fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<Option<Item>> {
        if let Some(ref title) = patch.title {
            ensure_title(title)?;
        }

        let Some(idx) = self.position(id) else {
            return Ok(None);
        };
        let item = &mut self.items[idx];
        if !patch.is_empty() {
            patch.apply_to(item);
            debug!(id, "updated item");
        }
        Ok(Some(item.clone()))
    }

    fn delete_item(&mut self, id: &str) -> Result<bool> {
        match self.position(id) {
            Some(idx) => {
                self.items.remove(idx);
                debug!(id, "deleted item");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
