//! Port contracts for the task store.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod id_generator;
pub mod persistence;

pub use id_generator::IdGenerator;
pub use persistence::{PersistenceError, PersistenceResult, TaskPersistence};
