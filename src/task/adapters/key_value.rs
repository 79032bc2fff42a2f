//! Snapshot persistence over a key-value store.

use crate::storage::{KeyValueStore, StorageKey};
use crate::task::{
    domain::TaskSnapshot,
    ports::{PersistenceError, PersistenceResult, TaskPersistence},
};

/// Default key holding the serialized task snapshot.
pub const DEFAULT_TASKS_KEY: &str = "tasks_v1";

/// Stores the task snapshot as a JSON array under a single key.
#[derive(Debug, Clone)]
pub struct KeyValueTaskPersistence<S> {
    store: S,
    key: StorageKey,
}

impl<S: KeyValueStore> KeyValueTaskPersistence<S> {
    /// Creates an adapter writing under `key`.
    #[must_use]
    pub const fn new(store: S, key: StorageKey) -> Self {
        Self { store, key }
    }

    /// Returns the key the snapshot is stored under.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> TaskPersistence for KeyValueTaskPersistence<S> {
    fn load(&self) -> Option<TaskSnapshot> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read task snapshot");
                return None;
            }
        };
        match serde_json::from_str::<TaskSnapshot>(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding corrupt task snapshot");
                None
            }
        }
    }

    fn save(&self, snapshot: &TaskSnapshot) -> PersistenceResult<()> {
        let encoded = serde_json::to_string(snapshot)
            .map_err(|err| PersistenceError::Encode(err.to_string()))?;
        self.store.set(&self.key, &encoded)?;
        Ok(())
    }
}
