//! Persistence layer for the shopping list
//!
//! Every operation follows the same cycle: load the collection, apply one
//! mutation, save the whole collection back. Nothing is cached between calls,
//! so the backing medium stays the single source of truth.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  ItemStore                   │
//! ├──────────────────────────────────────────────┤
//! │  append │ update_quantity │ remove           │
//! │         └───── write_lock held ─────┐        │
//! │  load ───────► mutate ───────► save │        │
//! └──────────────────────────────────────────────┘
//!          │                          │
//!    JsonFileStore               MemoryStore
//!   (temp file + rename)        (Vec behind a lock)
//! ```
//!
//! The write lock serializes whole load-mutate-save cycles, so two overlapping
//! appends can never both start from the same snapshot and lose one update.
//! Plain loads skip the lock.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use parking_lot::Mutex;
use serde_json::Number;

use crate::error::{Result, StoreError};
use crate::item::{validate_quantity, Collection, Item};

/// Storage backend for the shopping list.
///
/// Implementors provide `load`, `save` and the lock guarding mutations; the
/// read-modify-write operations are built on top of those.
pub trait ItemStore: Send + Sync {
    /// Read the current collection. A store with nothing saved yet is empty.
    fn load(&self) -> Result<Collection>;

    /// Replace the stored collection with `items`
    fn save(&self, items: &[Item]) -> Result<()>;

    /// Lock held for the duration of every load-mutate-save cycle
    fn write_lock(&self) -> &Mutex<()>;

    /// Push an item to the end of the list and return it as stored.
    ///
    /// Names are not deduplicated: an item with an existing name is appended
    /// as a second entry.
    fn append(&self, item: Item) -> Result<Item> {
        item.validate()?;

        let _guard = self.write_lock().lock();
        let mut items = self.load()?;
        items.push(item.clone());
        self.save(&items)?;

        tracing::debug!(name = %item.name, total = items.len(), "Appended item");
        Ok(item)
    }

    /// Set the quantity of the first item called `name`
    fn update_quantity(&self, name: &str, quantity: Number) -> Result<Item> {
        validate_quantity(&quantity)?;

        let _guard = self.write_lock().lock();
        let mut items = self.load()?;
        let item = items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        item.quantity = quantity;
        let updated = item.clone();
        self.save(&items)?;

        tracing::debug!(name = %name, quantity = %updated.quantity, "Updated item quantity");
        Ok(updated)
    }

    /// Drop every item called `name`, keeping the others in order.
    ///
    /// Returns how many entries were removed; zero matches is `NotFound`.
    fn remove(&self, name: &str) -> Result<usize> {
        let _guard = self.write_lock().lock();
        let items = self.load()?;
        let before = items.len();
        let kept: Collection = items.into_iter().filter(|item| item.name != name).collect();
        let removed = before - kept.len();

        if removed == 0 {
            return Err(StoreError::NotFound(name.to_string()));
        }
        self.save(&kept)?;

        tracing::debug!(name = %name, removed, "Removed items");
        Ok(removed)
    }
}
