//! File-backed key-value store
//!
//! One file per key under a single directory, named `<key>.json`. Keys are
//! schema-derived (`{storage_key}-data`, `{storage_key}-last-saved`) and
//! already filesystem-safe.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::errors::StoreResult;
use super::kv::KeyValue;

/// Key-value store persisting each key to its own file.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory. The directory is
    /// created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.set("talent-roster-data", "{}").unwrap();
        assert_eq!(
            store.get("talent-roster-data").unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn test_missing_key_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_directory_created_on_first_write() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        let mut store = FileStore::new(&nested);
        store.set("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_remove_missing_key_ok() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.remove("absent").unwrap();
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }
}
