//! Identifier generation port.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Injected into the store so tests can supply deterministic identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn next_id(&self) -> TaskId;
}
