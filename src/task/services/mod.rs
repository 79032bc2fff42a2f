//! Application services: the task store and view derivation.

mod store;
mod view;

pub use store::{CreateTaskRequest, MAX_ID_ATTEMPTS, TaskCounts, TaskStore};
pub use view::derive_view;
