//! Identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::task::{domain::TaskId, ports::IdGenerator};
use uuid::Uuid;

/// Generates random version 4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::from_uuid(Uuid::new_v4())
    }
}

/// Generates `<prefix>-1`, `<prefix>-2`, ... in call order.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `<prefix>-1`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("task")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> TaskId {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        TaskId::from_generated(format!("{}-{sequence}", self.prefix))
    }
}
