//! Shopping List Core - item model and persistence
//!
//! This crate holds everything the HTTP layer needs besides HTTP: the
//! [`Item`] type with its validation rules, and the [`ItemStore`] trait with a
//! JSON file backend and an in-memory backend.
//!
//! # Example
//!
//! ```no_run
//! use shopping_list_core::{Item, ItemStore, JsonFileStore};
//!
//! # fn example() -> shopping_list_core::Result<()> {
//! let store = JsonFileStore::new("shopping-list.json");
//! store.append(Item::new("milk", 2))?;
//! store.update_quantity("milk", 5.into())?;
//! store.remove("milk")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod item;
pub mod store;

pub use error::{ItemError, Result, StoreError};
pub use item::{Collection, Item};
pub use store::json_file::DEFAULT_STORE_PATH;
pub use store::{ItemStore, JsonFileStore, MemoryStore};
