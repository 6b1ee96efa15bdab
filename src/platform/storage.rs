// SPDX-License-Identifier: MPL-2.0
//! Preference store: the shell's equivalent of browser local storage.
//!
//! Values are plain strings with no versioning. Readers must treat a value
//! they do not recognize as absent, never as an error.
//!
//! [`FileStore`] keeps the whole map in memory and writes it through to a
//! CBOR file on every change:
//! - Compact binary storage
//! - Clear separation from the user-editable `settings.toml`
//!
//! # Path Resolution
//!
//! 1. Use [`FileStore::open_in`] with an explicit directory
//! 2. Set `SUMMON_DOCS_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::app::paths;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Store key for the theme preference (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "theme";

/// Store key for the language preference (a registered language code).
pub const LANGUAGE_KEY: &str = "language";

/// File name of the store within the data directory.
const STORE_FILE: &str = "preferences.cbor";

/// String key/value storage that survives restarts.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// The in-memory value is updated even when persisting fails, so readers
    /// in the same session always observe the latest write.
    ///
    /// # Errors
    ///
    /// Returns an error when the value could not be written to durable storage.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, used in tests and when no data directory exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a CBOR string map.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). A missing file is an
    /// empty store; an unreadable or corrupted file is also treated as empty
    /// and reported through the warning key.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORE_FILE);
            dir
        }) else {
            tracing::warn!("no data directory available, preferences will not persist");
            return (
                Self::default(),
                Some("notification.statePathError".to_string()),
            );
        };

        if !path.exists() {
            return (Self::at(path, BTreeMap::new()), None);
        }

        match read_values(&path) {
            Ok(values) => {
                tracing::debug!(path = %path.display(), entries = values.len(), "loaded preferences");
                (Self::at(path, values), None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
                (
                    Self::at(path, BTreeMap::new()),
                    Some("notification.stateParseError".to_string()),
                )
            }
        }
    }

    fn at(path: PathBuf, values: BTreeMap<String, String>) -> Self {
        Self {
            path: Some(path),
            values,
        }
    }

    /// Location of the backing file, if the store is persistent.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());

        match &self.path {
            Some(path) => write_values(path, &self.values),
            None => Ok(()),
        }
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let values = ciborium::from_reader(reader)?;
    Ok(values)
}

fn write_values(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(values, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").expect("set");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn memory_store_with_entries() {
        let store = MemoryStore::with_entries([(LANGUAGE_KEY, "zh")]);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("zh"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempdir().expect("create temp dir");

        let (mut store, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        store.set(LANGUAGE_KEY, "ja").expect("set language");
        store.set(THEME_KEY, "light").expect("set theme");

        let (reopened, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("ja"));
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let nested = dir.path().join("nested").join("deeply");

        let (mut store, _) = FileStore::open_in(Some(nested.clone()));
        store.set(THEME_KEY, "dark").expect("set theme");

        assert!(nested.join(STORE_FILE).exists());
    }

    #[test]
    fn corrupted_file_is_treated_as_empty_with_warning() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join(STORE_FILE), "not valid cbor data").expect("write file");

        let (store, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification.stateParseError"));
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn write_failure_keeps_value_in_memory() {
        let dir = tempdir().expect("create temp dir");
        // A directory where the file should be makes File::create fail.
        fs::create_dir(dir.path().join(STORE_FILE)).expect("create blocking dir");

        let mut store = FileStore::at(dir.path().join(STORE_FILE), BTreeMap::new());
        assert!(store.set(THEME_KEY, "dark").is_err());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn buffered_write_failure_is_reported() {
        // Writes to /dev/full fail with ENOSPC once the buffer is flushed.
        let device = Path::new("/dev/full");
        if !device.exists() {
            return;
        }

        let values = BTreeMap::from([(THEME_KEY.to_string(), "dark".to_string())]);
        assert!(write_values(device, &values).is_err());
    }
}
