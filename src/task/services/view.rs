//! Derivation of the visible task list.

use std::cmp::Ordering;

use crate::task::domain::{SortKey, Task, ViewCriteria};

/// Computes the filtered, searched and sorted projection of `tasks`.
///
/// Filtering by completion state runs first, then the case-insensitive
/// search over title and description, then a stable sort by the active key.
/// Ties keep their relative order from `tasks`. The input is never
/// modified; the result is a fresh list of copies.
#[must_use]
pub fn derive_view(tasks: &[Task], criteria: &ViewCriteria) -> Vec<Task> {
    let needle = criteria.search_needle();
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| criteria.filter.admits(task))
        .filter(|task| needle.as_deref().is_none_or(|text| task.mentions(text)))
        .cloned()
        .collect();
    visible.sort_by(|left, right| compare(criteria.sort, left, right));
    visible
}

fn compare(key: SortKey, left: &Task, right: &Task) -> Ordering {
    match key {
        SortKey::CreatedDesc => right.created_at().cmp(&left.created_at()),
        SortKey::CreatedAsc => left.created_at().cmp(&right.created_at()),
        SortKey::DueAsc => compare_due(left, right),
        SortKey::PriorityDesc => right.priority().weight().cmp(&left.priority().weight()),
        SortKey::Status => left.is_completed().cmp(&right.is_completed()),
    }
}

/// Undated tasks sort after every dated one.
fn compare_due(left: &Task, right: &Task) -> Ordering {
    match (left.due_date(), right.due_date()) {
        (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
