//! PostgreSQL warehouse adapter
//!
//! Pooled client plus the dimension loader implementation.

pub mod client;
pub mod loader;
pub mod models;

pub use client::{redact_connection_string, PostgreSQLClient};
pub use loader::PostgresWarehouse;
pub use models::DimensionRow;
