//! Taskdeck: personal task-tracking engine.
//!
//! This crate holds the state and derivation logic behind a to-do list: an
//! owned task collection with invariant-preserving mutations, a pure view
//! deriver for filter, search and sort criteria, and a persistence contract
//! that saves the collection after every change.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and id generation
//! - **Adapters**: Concrete implementations of ports (key-value storage)
//!
//! # Modules
//!
//! - [`task`]: Task model, store, and view derivation
//! - [`storage`]: Key-value storage port with memory and file adapters
//! - [`preferences`]: Display theme preference
//! - [`config`]: Storage configuration

pub mod config;
pub mod preferences;
pub mod storage;
pub mod task;
