//! Task store owning the authoritative task collection.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use super::derive_view;
use crate::task::{
    domain::{
        Priority, Task, TaskDetails, TaskDomainError, TaskId, TaskPatch, TaskSnapshot,
        ViewCriteria,
    },
    ports::{IdGenerator, TaskPersistence},
};

/// Identifier draws attempted by `create` before giving up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let mut details = TaskDetails::new(self.title)?.with_due_date(self.due_date);
        if let Some(description) = self.description {
            details = details.with_description(description);
        }
        if let Some(priority) = self.priority {
            details = details.with_priority(priority);
        }
        Ok(details)
    }
}

/// Task totals by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Every task.
    pub total: usize,
    /// Tasks not yet completed.
    pub pending: usize,
    /// Completed tasks.
    pub completed: usize,
}

/// Owner of the task collection and its mutation API.
///
/// Every applied mutation is followed by a best-effort save of the full
/// collection. Unknown identifiers and blank titles on create are silent
/// no-ops: the operation reports `false` (or `None`) and nothing is saved.
pub struct TaskStore<P, C, G>
where
    P: TaskPersistence,
    C: Clock + Send + Sync,
    G: IdGenerator,
{
    tasks: Vec<Task>,
    persistence: Arc<P>,
    clock: Arc<C>,
    ids: Arc<G>,
}

impl<P, C, G> TaskStore<P, C, G>
where
    P: TaskPersistence,
    C: Clock + Send + Sync,
    G: IdGenerator,
{
    /// Creates a store with an empty collection.
    #[must_use]
    pub const fn new(persistence: Arc<P>, clock: Arc<C>, ids: Arc<G>) -> Self {
        Self {
            tasks: Vec::new(),
            persistence,
            clock,
            ids,
        }
    }

    /// Creates a store hydrated from the last saved snapshot.
    ///
    /// Starts empty when nothing was saved or the snapshot is unusable.
    #[must_use]
    pub fn open(persistence: Arc<P>, clock: Arc<C>, ids: Arc<G>) -> Self {
        let snapshot = persistence.load();
        let mut store = Self::new(persistence, clock, ids);
        store.hydrate(snapshot);
        store
    }

    /// Replaces the collection with a validated snapshot.
    ///
    /// A missing snapshot, or one that violates collection invariants,
    /// leaves the store empty.
    pub fn hydrate(&mut self, snapshot: Option<TaskSnapshot>) {
        self.tasks = match snapshot {
            None => Vec::new(),
            Some(loaded) => match loaded.validate() {
                Ok(()) => {
                    tracing::info!(count = loaded.len(), "hydrated task collection");
                    loaded.into_tasks()
                }
                Err(err) => {
                    tracing::warn!(error = %err, "rejected task snapshot; starting empty");
                    Vec::new()
                }
            },
        };
    }

    /// Creates a task and prepends it to the collection.
    ///
    /// Returns `None`, leaving the collection untouched, when the title is
    /// blank after trimming or the identifier generator keeps returning
    /// identifiers already in use.
    pub fn create(&mut self, request: CreateTaskRequest) -> Option<Task> {
        let details = match request.into_details() {
            Ok(details) => details,
            Err(err) => {
                tracing::debug!(error = %err, "ignored task creation");
                return None;
            }
        };
        let Some(id) = self.fresh_id() else {
            tracing::warn!(
                attempts = MAX_ID_ATTEMPTS,
                "no unused task identifier available; task not created"
            );
            return None;
        };
        let task = Task::new(id, details, &*self.clock);
        tracing::debug!(task_id = %task.id(), "created task");
        self.tasks.insert(0, task.clone());
        self.persist();
        Some(task)
    }

    /// Applies `patch` to the task with `id` and refreshes its update time.
    ///
    /// The title is stored as given; callers reject blank titles before
    /// submitting an edit. Returns `false` when no task has `id`.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "ignored update for unknown task");
            return false;
        };
        task.apply(patch, &*self.clock);
        tracing::debug!(task_id = %id, "updated task");
        self.persist();
        true
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` when no task has `id`.
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "ignored toggle for unknown task");
            return false;
        };
        task.toggle_completed(&*self.clock);
        tracing::debug!(task_id = %id, completed = task.is_completed(), "toggled task");
        self.persist();
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` when no task has `id`, so repeated deletes are
    /// harmless.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "ignored delete for unknown task");
            return false;
        };
        self.tasks.remove(position);
        tracing::debug!(task_id = %id, "deleted task");
        self.persist();
        true
    }

    /// Removes every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        let removed = before.saturating_sub(self.tasks.len());
        if removed > 0 {
            tracing::debug!(removed, "cleared completed tasks");
            self.persist();
        }
        removed
    }

    /// Returns the collection in storage order (newest insert first).
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a copy of the collection suitable for persistence.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::new(self.tasks.clone())
    }

    /// Derives the visible list for `criteria`.
    #[must_use]
    pub fn view(&self, criteria: &ViewCriteria) -> Vec<Task> {
        derive_view(&self.tasks, criteria)
    }

    /// Counts tasks by completion state.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.is_completed()).count();
        TaskCounts {
            total: self.tasks.len(),
            pending: self.tasks.len().saturating_sub(completed),
            completed,
        }
    }

    /// Draws identifiers until one is not already in the collection, giving
    /// up after [`MAX_ID_ATTEMPTS`] draws.
    fn fresh_id(&self) -> Option<TaskId> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.next_id())
            .find(|candidate| {
                let unused = self.get(candidate).is_none();
                if !unused {
                    tracing::warn!(task_id = %candidate, "generated identifier already in use");
                }
                unused
            })
    }

    fn persist(&self) {
        if let Err(err) = self.persistence.save(&self.snapshot()) {
            tracing::warn!(error = %err, "failed to save task snapshot");
        }
    }
}
