//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// Two tasks in one snapshot share an identifier.
    #[error("duplicate task identifier in snapshot: {0}")]
    DuplicateTaskId(String),

    /// A task was last updated before it was created.
    #[error("task {0} has an update timestamp earlier than its creation timestamp")]
    UpdatedBeforeCreated(String),
}

/// Error returned while parsing a priority level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing view criteria tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCriteriaError {
    /// The status filter token is unknown.
    #[error("unknown status filter: {0}")]
    Filter(String),

    /// The sort key token is unknown.
    #[error("unknown sort key: {0}")]
    SortKey(String),
}
