//! Directory-backed key-value store.
//!
//! Each key maps to a file of the same name inside a capability-scoped
//! directory. Writes land in a sibling temporary file first and are
//! renamed into place, so a crash mid-write leaves the previous value
//! intact.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use super::{KeyValueResult, KeyValueStore, KeyValueStoreError, StorageKey};

const TEMP_SUFFIX: &str = "tmp";

/// Key-value store persisting one file per key.
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(KeyValueStoreError::backend)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(KeyValueStoreError::backend)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already-opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn value_file(key: &StorageKey) -> &str {
        key.as_str()
    }

    fn temp_file(key: &StorageKey) -> String {
        format!(".{key}.{TEMP_SUFFIX}")
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>> {
        match self.dir.read_to_string(Self::value_file(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::backend(err)),
        }
    }

    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()> {
        let temp = Self::temp_file(key);
        self.dir
            .write(&temp, value)
            .map_err(KeyValueStoreError::backend)?;
        self.dir
            .rename(&temp, &self.dir, Self::value_file(key))
            .map_err(KeyValueStoreError::backend)
    }

    fn remove(&self, key: &StorageKey) -> KeyValueResult<()> {
        match self.dir.remove_file(Self::value_file(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueStoreError::backend(err)),
        }
    }
}
