//! In-memory key-value store.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use super::{KeyValueResult, KeyValueStore, KeyValueStoreError, StorageKey};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep one handle for
/// inspection while the store under test owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (StorageKey, String)>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }
}

fn poisoned(err: &impl fmt::Display) -> KeyValueStoreError {
    KeyValueStoreError::backend(std::io::Error::other(err.to_string()))
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| poisoned(&err))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.insert(key.clone(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> KeyValueResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.remove(key);
        Ok(())
    }
}
