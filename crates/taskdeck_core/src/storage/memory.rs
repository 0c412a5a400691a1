//! In-memory storage backends for tests and embedded callers.

use super::{StorageBackend, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local key-value backend.
///
/// The in-memory twin of [`super::FileStorage`]: same contract, no
/// durability. Tests seed it directly through the trait methods.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means a writer panicked mid-test; the map
        // itself is still a plain string table worth reading.
        match self.items.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Number of keys currently stored. Test convenience.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items().remove(key);
        Ok(())
    }
}

/// Backend for environments with no storage medium at all.
///
/// Every operation fails with [`StorageError::Unavailable`], which the store
/// absorbs into empty reads and skipped writes. Mirrors running the original
/// application outside a browser context.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl StorageBackend for UnavailableStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("no storage context"))
    }

    fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("no storage context"))
    }

    fn remove_item(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("no storage context"))
    }
}
