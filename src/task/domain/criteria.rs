//! Ephemeral criteria driving view derivation.

use super::{ParseCriteriaError, Task};
use std::fmt;

/// Completion-state filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl StatusFilter {
    /// All filters in menu order.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Returns the token used by the UI layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` when the task passes this filter.
    #[must_use]
    pub const fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseCriteriaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseCriteriaError::Filter(value.to_owned())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the visible tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Newest first.
    #[default]
    CreatedDesc,
    /// Oldest first.
    CreatedAsc,
    /// Earliest due date first; undated tasks last.
    DueAsc,
    /// High, then Medium, then Low.
    PriorityDesc,
    /// Incomplete before completed.
    Status,
}

impl SortKey {
    /// All sort keys in menu order.
    pub const ALL: [Self; 5] = [
        Self::CreatedDesc,
        Self::CreatedAsc,
        Self::DueAsc,
        Self::PriorityDesc,
        Self::Status,
    ];

    /// Returns the token used by the UI layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedDesc => "created_desc",
            Self::CreatedAsc => "created_asc",
            Self::DueAsc => "due_asc",
            Self::PriorityDesc => "priority_desc",
            Self::Status => "status",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreatedDesc => "Newest first",
            Self::CreatedAsc => "Oldest first",
            Self::DueAsc => "Due date",
            Self::PriorityDesc => "Priority (High → Low)",
            Self::Status => "Status",
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseCriteriaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created_desc" => Ok(Self::CreatedDesc),
            "created_asc" => Ok(Self::CreatedAsc),
            "due_asc" => Ok(Self::DueAsc),
            "priority_desc" => Ok(Self::PriorityDesc),
            "status" => Ok(Self::Status),
            _ => Err(ParseCriteriaError::SortKey(value.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (filter, search, sort) triple for one view derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCriteria {
    /// Completion-state filter.
    pub filter: StatusFilter,
    /// Free-text search; blank means no search.
    pub search: String,
    /// Ordering of the result.
    pub sort: SortKey,
}

impl ViewCriteria {
    /// Creates criteria from all three parts.
    #[must_use]
    pub fn new(filter: StatusFilter, search: impl Into<String>, sort: SortKey) -> Self {
        Self {
            filter,
            search: search.into(),
            sort,
        }
    }

    /// Sets the filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the lower-cased, trimmed search text, or `None` when blank.
    ///
    /// Surrounding whitespace is dropped before matching, so `"report "`
    /// matches a title ending in `report`.
    #[must_use]
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}
