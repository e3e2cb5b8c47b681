//! JSON file backend for the native CLI.
//!
//! The file holds one JSON object mapping keys to string values, so it reads
//! the same as a `localStorage` dump:
//!
//! ```text
//! {"waterStreak":"{\"count\":3,\"lastUpdated\":\"2026-10-18\"}"}
//! ```

use crate::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// The file is created on first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hydro-store-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_reads_empty() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.get("waterStreak").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_handle() {
        let path = temp_path("reopen");
        let store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        reopened.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let path = temp_path("garbage");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(store.get("a"), Err(StoreError::Parse(_))));
        fs::remove_file(&path).unwrap();
    }
}
