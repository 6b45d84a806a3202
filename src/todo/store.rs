use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value storage for persisted snapshots.
pub trait KeyValueStore: Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Keeps every key in one JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<path>.tmp`, next to the store file.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store file: {}", self.path.display()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory: {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write store file: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace store file: {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later save
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable store contents: {:#}", e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));

        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("store.json"));

        store.set("todos", "{\"a\":1}").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("{\"a\":1}"));

        // A fresh handle on the same file sees the value
        let reopened = FileStore::new(dir.path().join("store.json"));
        assert_eq!(reopened.get("todos").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");
        let mut store = FileStore::new(&path);

        store.set("todos", "x").unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("nested").join("deeper").join("store.json.tmp").exists());
    }

    #[test]
    fn test_set_leaves_sibling_tmp_file_alone() {
        let dir = tempdir().unwrap();
        let sibling = dir.path().join("store.tmp");
        fs::write(&sibling, "keep me").unwrap();

        let mut store = FileStore::new(dir.path().join("store.json"));
        store.set("todos", "value").unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
        assert!(!dir.path().join("store.json.tmp").exists());
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("store.json"));

        store.set("todos", "one").unwrap();
        store.set("other", "two").unwrap();
        store.set("todos", "three").unwrap();

        assert_eq!(store.get("todos").unwrap().as_deref(), Some("three"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("store.json"));

        store.set("todos", "one").unwrap();
        store.remove("todos").unwrap();
        assert_eq!(store.get("todos").unwrap(), None);

        // Removing again is fine
        store.remove("todos").unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error_on_get() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("todos").is_err());
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        store.set("todos", "fresh").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("todos").unwrap(), None);

        store.set("todos", "value").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("value"));

        store.remove("todos").unwrap();
        assert_eq!(store.get("todos").unwrap(), None);
    }
}
