//! Adapter implementations for task ports.

pub mod ids;
pub mod key_value;

pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use key_value::{DEFAULT_TASKS_KEY, KeyValueTaskPersistence};
