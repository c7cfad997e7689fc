//! JSON file-backed preference store.
//!
//! This module provides a durable [`PreferenceStore`] implementation using
//! JSON serialization, for native hosts and tests. It uses atomic file writes
//! (write-to-temp + rename) to prevent corruption on crashes.
//!
//! A corrupt or unparsable file is not an error: preferences are a
//! best-effort cache, so the store logs a warning and starts over from an
//! empty dataset, and the bridge falls back to defaults.

use crate::domain::error::Result;
use crate::persist::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One stored preference value.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceRecord {
    /// The stored value.
    value: String,

    /// Unix timestamp of the last write, for debugging stale state.
    updated_at: i64,
}

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps the entries in a
/// versioned envelope for future format migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format.
    version: u32,

    /// Stored preferences, indexed by key.
    #[serde(default)]
    entries: HashMap<String, PreferenceRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// The entire dataset is kept in memory and persisted on modification with an
/// atomic write. Designed for single-threaded hosts; it is `Send` but not
/// `Sync`.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "theme": {
///       "value": "darkTheme",
///       "updated_at": 1234567890
///     }
///   }
/// }
/// ```
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonFileStore {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists and parses, its entries are loaded; a corrupt file
    /// is logged and replaced with an empty dataset. Parent directories are
    /// created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read (permissions).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hubstate::persist::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/preferences.json"))?;
    /// # Ok::<(), hubstate::domain::HubStateError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads storage data from a JSON file, recovering from corrupt content.
    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str::<StorageData>(&contents) {
            Ok(data) => {
                tracing::debug!(
                    version = data.version,
                    entries = data.entries.len(),
                    "loaded storage data"
                );
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "corrupt preference file, starting empty");
                Ok(StorageData::default())
            }
        }
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path, so the file is never left in a corrupt state even if the
    /// process crashes mid-write.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving preferences");

        let json = serde_json::to_string_pretty(&self.data).map_err(|e| {
            crate::domain::HubStateError::Storage(format!("failed to serialize JSON: {e}"))
        })?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.entries.get(key).map(|record| record.value.clone());
        tracing::trace!(key = %key, found = value.is_some(), "preference read");
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("preference_write", key = %key).entered();

        self.data.entries.insert(
            key.to_string(),
            PreferenceRecord {
                value: value.to_string(),
                updated_at: chrono::Utc::now().timestamp(),
            },
        );

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    /// Ensures pending data is saved on drop.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_round_trips_through_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let mut store = JsonFileStore::new(path.clone()).unwrap();
            store.write("theme", "darkTheme").unwrap();
        }

        let reopened = JsonFileStore::new(path).unwrap();
        assert_eq!(reopened.read("theme").unwrap().as_deref(), Some("darkTheme"));
    }

    #[test]
    fn atomic_write_leaves_no_temp_residue() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = JsonFileStore::new(path.clone()).unwrap();
        store.write("theme", "theme").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_starts_empty_instead_of_failing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path).unwrap();
        assert_eq!(store.read("theme").unwrap(), None);
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.read("theme").unwrap(), None);
    }

    #[test]
    fn overwrite_replaces_the_previous_value() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("preferences.json")).unwrap();

        store.write("theme", "theme").unwrap();
        store.write("theme", "darkTheme").unwrap();

        assert_eq!(store.read("theme").unwrap().as_deref(), Some("darkTheme"));
    }
}
