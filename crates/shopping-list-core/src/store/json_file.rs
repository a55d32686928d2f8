//! JsonFileStore: the shopping list as a single JSON file
//!
//! The file holds a pretty-printed JSON array of items. Saves write a sibling
//! temp file and rename it over the target, so readers never see a partial
//! list and a failed write leaves the previous file in place.

use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::ItemStore;
use crate::error::{Result, StoreError};
use crate::item::{Collection, Item};

/// Default location of the backing file
pub const DEFAULT_STORE_PATH: &str = "./shopping-list.json";

/// File-backed item store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Use `path` as the backing file. Nothing is touched until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl ItemStore for JsonFileStore {
    fn load(&self) -> Result<Collection> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // A file that was created but never written counts as an empty list
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Collection =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        for (index, item) in items.iter().enumerate() {
            item.validate()
                .map_err(|e| self.corrupt(format!("item {}: {}", index, e)))?;
        }

        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let content = serde_json::to_string_pretty(items)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "shopping-list".to_string());
        let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        fs::write(&tmp_path, content).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }

        tracing::debug!(path = %self.path.display(), count = items.len(), "Saved shopping list");
        Ok(())
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }
}
