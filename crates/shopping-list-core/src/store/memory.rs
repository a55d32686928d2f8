//! In-memory store, used in tests and when embedding the router

use parking_lot::{Mutex, RwLock};

use super::ItemStore;
use crate::error::Result;
use crate::item::{Collection, Item};

/// Shopping list kept in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Collection>,
    write_lock: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that starts with `items`
    pub fn with_items(items: Collection) -> Self {
        Self {
            items: RwLock::new(items),
            write_lock: Mutex::new(()),
        }
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> Result<Collection> {
        Ok(self.items.read().clone())
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        *self.items.write() = items.to_vec();
        Ok(())
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }
}
