//! Persistence port for task collection snapshots.

use crate::storage::KeyValueStoreError;
use crate::task::domain::TaskSnapshot;
use thiserror::Error;

/// Result type for snapshot persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Load-at-startup, save-on-change contract for the task collection.
#[cfg_attr(test, mockall::automock)]
pub trait TaskPersistence: Send + Sync {
    /// Returns the last saved snapshot.
    ///
    /// Returns `None` when nothing was saved or the stored data cannot be
    /// read or decoded; implementations never surface those failures.
    fn load(&self) -> Option<TaskSnapshot>;

    /// Saves the full collection, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when encoding or writing fails. Callers
    /// treat saves as best-effort.
    fn save(&self, snapshot: &TaskSnapshot) -> PersistenceResult<()>;
}

/// Errors returned by snapshot persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The snapshot could not be encoded.
    #[error("failed to encode task snapshot: {0}")]
    Encode(String),

    /// The underlying key-value store failed.
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),
}
