//! Domain model for the task collection.
//!
//! Tasks, their priorities, collection snapshots and view criteria live
//! here with no storage or presentation concerns.

mod criteria;
mod error;
mod ids;
mod priority;
mod snapshot;
mod task;

pub use criteria::{SortKey, StatusFilter, ViewCriteria};
pub use error::{ParseCriteriaError, ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use snapshot::TaskSnapshot;
pub use task::{PersistedTaskData, Task, TaskDetails, TaskPatch};
