//! Key-value store persisted as a flat JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gympro_core::{KeyValueStore, StoreError};

pub const SESSION_FILE_NAME: &str = "session.json";

type Entries = BTreeMap<String, String>;

/// Stores string entries in `session.json` inside the data directory.
///
/// Every mutation rewrites the whole file through a temp file + rename, so a
/// crash mid-write leaves either the old or the new contents. Mutations are
/// serialised by an internal lock.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| StoreError::Io(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Read, modify and write back the entries while holding the lock.
    fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Io("session store lock poisoned".into()))?;

        // A corrupt file is replaced rather than blocking every later write
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt(msg)) => {
                tracing::warn!(path = %self.path.display(), error = %msg, "Discarding corrupt session file");
                Entries::new()
            }
            Err(e) => return Err(e),
        };

        if f(&mut entries) {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_items(&[(key, value)])
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.remove_items(&[key])
    }

    fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StoreError> {
        self.update(|entries| {
            for (key, value) in items {
                entries.insert((*key).to_string(), (*value).to_string());
            }
            true
        })
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.update(|entries| {
            let mut changed = false;
            for key in keys {
                changed |= entries.remove(*key).is_some();
            }
            changed
        })
    }
}
