//! Key-value backends
//!
//! The store only needs the three string operations browser `localStorage`
//! offers. Anything that can provide them can back a [`Store`](super::Store):
//!
//! - [`MemoryBackend`]: process-local map, used in tests and benchmarks
//! - [`FileBackend`]: a single JSON object on disk, used by the CLI
//! - the WASM front end wraps `window.localStorage`

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::error::StoreResult;

/// String key-value storage with `localStorage` semantics
pub trait KeyValueBackend {
    /// Read a value, `None` if the key is absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

/// In-memory backend
///
/// Clones share the same map, the way two tabs share one `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// JSON file backend
///
/// Holds every key in one JSON object. Each write rewrites the whole file
/// through a temporary sibling and a rename.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(items)?)?;
        fs::rename(&tmp, &self.path)?;

        tracing::trace!(path = ?self.path, keys = items.len(), "Store file written");
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use tempfile::tempdir;

    #[test]
    fn test_memory_backend_clones_share_state() {
        let a = MemoryBackend::new();
        let b = a.clone();

        a.set_item("k", "v").unwrap();
        assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));

        b.remove_item("k").unwrap();
        assert!(a.is_empty());
        // Removing twice is fine
        a.remove_item("k").unwrap();
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested").join("store.json"));

        assert_eq!(backend.get_item("missing").unwrap(), None);

        backend.set_item("rc_bot_init", "1").unwrap();
        backend.set_item("rc_bot_calendar", "[]").unwrap();

        let reopened = FileBackend::new(backend.path());
        assert_eq!(reopened.get_item("rc_bot_init").unwrap().as_deref(), Some("1"));

        reopened.remove_item("rc_bot_init").unwrap();
        assert_eq!(backend.get_item("rc_bot_init").unwrap(), None);
        assert_eq!(backend.get_item("rc_bot_calendar").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_backend_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let backend = FileBackend::new(&path);
        let err = backend.get_item("rc_bot_init").unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
