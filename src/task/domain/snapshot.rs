//! Order-preserving snapshot of the task collection.

use super::{Task, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serializable copy of the full task collection, in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskSnapshot(Vec<Task>);

impl TaskSnapshot {
    /// Wraps the given tasks without validating them.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    /// Returns the tasks in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    /// Consumes the snapshot, returning its tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.0
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the snapshot holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks the collection invariants that deserialization cannot.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a blank identifier, a repeated
    /// identifier, or an update timestamp before creation. Titles are not
    /// checked because edits may store a blank title.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for task in &self.0 {
            if task.id().is_blank() {
                return Err(TaskDomainError::EmptyTaskId);
            }
            if task.updated_at() < task.created_at() {
                return Err(TaskDomainError::UpdatedBeforeCreated(
                    task.id().to_string(),
                ));
            }
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateTaskId(task.id().to_string()));
            }
        }
        Ok(())
    }
}

impl From<Vec<Task>> for TaskSnapshot {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}
