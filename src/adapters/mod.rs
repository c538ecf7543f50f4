//! External system integrations.
//!
//! - [`sources`] - extraction sources (CSV directory, JSON file, HTTP API)
//! - [`warehouse`] - dimension loader abstraction (trait-based)
//! - [`postgresql`] - PostgreSQL implementation of the dimension loaders
//!
//! Adapters isolate external dependencies behind traits so the orchestrator
//! can be exercised with test doubles.

pub mod postgresql;
pub mod sources;
pub mod warehouse;
