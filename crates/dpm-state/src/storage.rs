//! Local key-value storage.
//!
//! The stores persist through [`KeyValueStore`], a string-to-string map
//! shaped like browser local storage. Backends:
//!
//! - [`MemoryStore`]: in-process map, used by tests and embedders
//! - [`FileStore`]: one JSON object file in a directory, used by the CLI
//! - `BrowserStore` (feature `web`): `window.localStorage`
//!
//! Access is single-threaded and last-writer-wins, so backends take `&self`
//! and use interior mutability.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Key holding the theme name (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "theme";

/// Key holding the persisted session JSON.
pub const AUTH_KEY: &str = "auth-storage";

/// File name used by [`FileStore`] inside its directory.
pub const STORAGE_FILENAME: &str = "storage.json";

/// A string key-value store.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ============================================================================
// Memory Store
// ============================================================================

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ============================================================================
// File Store
// ============================================================================

/// Store backed by a single JSON object file.
///
/// The whole file is read once on open and rewritten on every write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store in `dir`.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store, with a warning; the next write replaces
    /// it.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(STORAGE_FILENAME);
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("{e}, starting with empty storage");
                BTreeMap::new()
            }
        };
        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        let file_key = path.display().to_string();
        match fs::read_to_string(path) {
            Ok(content) => {
                let entries = serde_json::from_str(&content)
                    .map_err(|e| StorageError::corrupt(&file_key, e))?;
                tracing::debug!("Loaded storage from {:?}", path);
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No storage file at {:?}", path);
                Ok(BTreeMap::new())
            }
            Err(e) => Err(StorageError::read(file_key, e)),
        }
    }

    /// Write `entries` to disk, then make them the visible contents.
    ///
    /// On failure the in-memory map is left as it was.
    fn commit(&self, key: &str, entries: BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::write(key, e))?;
        }
        let content =
            serde_json::to_string_pretty(&entries).map_err(|e| StorageError::write(key, e))?;
        fs::write(&self.path, content).map_err(|e| StorageError::write(key, e))?;
        *self.entries.borrow_mut() = entries;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.entries.borrow().clone();
        next.insert(key.to_string(), value.to_string());
        self.commit(key, next)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut next = self.entries.borrow().clone();
        if next.remove(key).is_none() {
            return Ok(());
        }
        self.commit(key, next)
    }
}

// ============================================================================
// Browser Store
// ============================================================================

/// `window.localStorage` backend.
#[cfg(feature = "web")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::read(key, format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::write(key, format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::write(key, format!("{e:?}")))
    }
}
