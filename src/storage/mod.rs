//! Key-value storage port shared by the task snapshot and preferences.
//!
//! Values are opaque strings addressed by validated [`StorageKey`]s. The
//! [`memory`] adapter backs tests and embedders without a disk; the [`file`]
//! adapter keeps one file per key inside a capability-scoped directory.

pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueStoreError>;

/// Durable string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the backing storage
    /// cannot be read.
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the write fails.
    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()>;

    /// Removes the value stored under `key`; absent keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the removal fails.
    fn remove(&self, key: &StorageKey) -> KeyValueResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &StorageKey) -> KeyValueResult<()> {
        (**self).remove(key)
    }
}

/// Storage key restricted to ASCII letters, digits, `_` and `-`.
///
/// The restriction keeps keys safe to use as file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StorageKey(String);

impl StorageKey {
    /// Creates a validated storage key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::InvalidKey`] when the value is empty or
    /// contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> KeyValueResult<Self> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && raw
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !is_valid {
            return Err(KeyValueStoreError::InvalidKey(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StorageKey {
    type Error = KeyValueStoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageKey> for String {
    fn from(key: StorageKey) -> Self {
        key.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The key contains characters outside the permitted set.
    #[error("invalid storage key '{0}', expected [A-Za-z0-9_-]+")]
    InvalidKey(String),

    /// Backing storage failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueStoreError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
