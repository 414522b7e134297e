//! Storage backends and the task store built on them.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use zoon::web_sys;

use crate::codec;
use crate::error::TaskError;
use crate::record::TaskRecord;

/// Raw key/value storage, the shape of the browser's `localStorage`.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, TaskError>;
    fn write(&self, key: &str, value: &str) -> Result<(), TaskError>;
    fn remove(&self, key: &str) -> Result<(), TaskError>;
}

/// Whole-sequence task persistence.
///
/// `load` never fails: a missing or unreadable sequence is an empty one.
pub trait TaskStore {
    fn load(&self) -> Vec<TaskRecord>;
    fn save(&self, records: &[TaskRecord]) -> Result<(), TaskError>;
}

// --- LocalStorage ---

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, TaskError> {
        let window =
            web_sys::window().ok_or_else(|| TaskError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|error| TaskError::Storage(format!("{error:?}")))?
            .ok_or_else(|| TaskError::Storage("local storage is not available".to_string()))
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, TaskError> {
        Self::storage()?
            .get_item(key)
            .map_err(|error| TaskError::Storage(format!("{error:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TaskError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|error| TaskError::Storage(format!("{error:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), TaskError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|error| TaskError::Storage(format!("{error:?}")))
    }
}

// --- MemoryStorage ---

/// In-memory backend. Clones share the same map, so a second controller
/// opened over a clone sees what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, TaskError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TaskError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TaskError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// --- KeyedStore ---

/// Keeps the JSON-encoded task sequence under a single backend key.
#[derive(Debug, Clone)]
pub struct KeyedStore<B> {
    backend: B,
    key: Cow<'static, str>,
}

impl<B: StorageBackend> KeyedStore<B> {
    pub fn new(backend: B, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored value as is, without decoding.
    pub fn raw(&self) -> Result<Option<String>, TaskError> {
        self.backend.read(&self.key)
    }

    /// Forget the whole sequence.
    pub fn clear(&self) -> Result<(), TaskError> {
        self.backend.remove(&self.key)
    }
}

impl<B: StorageBackend> TaskStore for KeyedStore<B> {
    fn load(&self) -> Vec<TaskRecord> {
        match self.backend.read(&self.key) {
            Ok(Some(raw)) => {
                let decoded = codec::decode(&raw);
                if decoded.upgraded {
                    log_info!("Assigning ids to legacy tasks in '{}'", self.key);
                    if let Err(error) = self.save(&decoded.records) {
                        log_error!("Failed to store task ids: {error:#}");
                    }
                }
                decoded.records
            }
            Ok(None) => Vec::new(),
            Err(error) => {
                log_error!("Failed to read tasks from '{}': {error:#}", self.key);
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[TaskRecord]) -> Result<(), TaskError> {
        let raw = codec::encode(records)?;
        self.backend.write(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_loads_empty() {
        let store = KeyedStore::new(MemoryStorage::new(), "Tasks");
        assert!(store.load().is_empty());
        assert_eq!(store.raw(), Ok(None));
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let store = KeyedStore::new(storage.clone(), "Tasks");
        let records = vec![TaskRecord::new("A"), TaskRecord::new("B")];
        store.save(&records).unwrap();

        let reopened = KeyedStore::new(storage, "Tasks");
        assert_eq!(reopened.load(), records);
    }

    #[test]
    fn test_keys_are_independent() {
        let storage = MemoryStorage::new();
        let work = KeyedStore::new(storage.clone(), "Work");
        let home = KeyedStore::new(storage.clone(), "Home");
        work.save(&[TaskRecord::new("Report")]).unwrap();

        assert_eq!(work.load().len(), 1);
        assert!(home.load().is_empty());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = MemoryStorage::new();
        let store = KeyedStore::new(storage.clone(), "Tasks");
        store.save(&[TaskRecord::new("A")]).unwrap();
        store.clear().unwrap();
        assert!(storage.is_empty());
        assert!(store.load().is_empty());
    }
}
