//! Task collection engine.
//!
//! The [`services::TaskStore`] owns the collection and applies create,
//! update, toggle and delete mutations, saving a snapshot after each one.
//! [`services::derive_view`] projects the collection through a filter, a
//! search and a sort key. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store and view services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
