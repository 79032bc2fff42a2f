//! Storage configuration.
//!
//! Names the directory holding persisted data and the keys used for the
//! task snapshot and the theme preference.

use std::sync::Arc;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preferences::{DEFAULT_THEME_KEY, ThemePreferences};
use crate::storage::{FileKeyValueStore, KeyValueStoreError, StorageKey};
use crate::task::adapters::{DEFAULT_TASKS_KEY, KeyValueTaskPersistence};

/// Errors raised while reading or applying configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid storage configuration: {0}")]
    Parse(String),

    /// A configured key is not a valid storage key.
    #[error("invalid {field}: {source}")]
    InvalidKey {
        /// Name of the offending field.
        field: &'static str,
        /// Underlying key validation error.
        source: KeyValueStoreError,
    },

    /// The task snapshot and theme would share a key.
    #[error("tasks_key and theme_key must differ, both are '{0}'")]
    SharedKey(String),

    /// The data directory could not be opened.
    #[error("failed to open data directory: {0}")]
    Storage(KeyValueStoreError),
}

/// Where and under which keys data is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one file per key.
    pub data_dir: Utf8PathBuf,
    /// Key for the task snapshot.
    pub tasks_key: String,
    /// Key for the theme preference.
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from("."),
            tasks_key: DEFAULT_TASKS_KEY.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
        }
    }
}

/// File-backed adapters opened from a [`StorageConfig`].
pub struct FileStorage {
    /// Task snapshot persistence.
    pub tasks: KeyValueTaskPersistence<Arc<FileKeyValueStore>>,
    /// Theme preference.
    pub theme: ThemePreferences<Arc<FileKeyValueStore>>,
}

impl StorageConfig {
    /// Parses a JSON configuration document; absent fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Returns the validated (tasks, theme) key pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] for a malformed key and
    /// [`ConfigError::SharedKey`] when both keys are equal.
    pub fn keys(&self) -> Result<(StorageKey, StorageKey), ConfigError> {
        let tasks = StorageKey::new(self.tasks_key.as_str()).map_err(|source| {
            ConfigError::InvalidKey {
                field: "tasks_key",
                source,
            }
        })?;
        let theme = StorageKey::new(self.theme_key.as_str()).map_err(|source| {
            ConfigError::InvalidKey {
                field: "theme_key",
                source,
            }
        })?;
        if tasks == theme {
            return Err(ConfigError::SharedKey(self.tasks_key.clone()));
        }
        Ok((tasks, theme))
    }

    /// Opens the data directory and wires both adapters onto it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the keys are invalid or the directory
    /// cannot be opened.
    pub fn open(&self) -> Result<FileStorage, ConfigError> {
        let (tasks_key, theme_key) = self.keys()?;
        let store =
            Arc::new(FileKeyValueStore::open(&self.data_dir).map_err(ConfigError::Storage)?);
        tracing::info!(data_dir = %self.data_dir, "opened task storage");
        Ok(FileStorage {
            tasks: KeyValueTaskPersistence::new(Arc::clone(&store), tasks_key),
            theme: ThemePreferences::new(store, theme_key),
        })
    }
}
