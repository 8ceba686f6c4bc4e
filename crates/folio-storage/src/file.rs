//! Persistent storage implementation
//!
//! This module provides a file-backed [`KeyValueStore`]: all keys live in one
//! JSON object that is read once on open and rewritten on every write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use folio_core::{KeyValueStore, StorageError};
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

/// File-backed implementation of KeyValueStore
///
/// Uses an in-memory map for reads and writes the whole map through a
/// temporary file and rename, so a crash mid-write leaves the previous file
/// intact.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the file contents
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. A file that is not a UTF-8 JSON
    /// object of strings is logged and treated as empty; it is replaced on the
    /// next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries = if path.exists() {
            let raw = fs::read(&path)?;
            match serde_json::from_slice::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => {
                    debug!(path = ?path, keys = entries.len(), "Loaded stored state");
                    entries
                }
                Err(e) => {
                    warn!(path = ?path, error = %e, "Stored state is corrupt, starting fresh");
                    BTreeMap::new()
                }
            }
        } else {
            debug!(path = ?path, "No existing state file, starting fresh");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_out(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::serialization(e.to_string()))?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        trace!(key, value, "Storing value");
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.write_out(&entries)
    }
}
