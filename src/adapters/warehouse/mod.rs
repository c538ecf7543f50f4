//! Warehouse abstraction layer
//!
//! Trait-based abstraction over dimension persistence, so the orchestrator
//! can run against PostgreSQL or against test doubles.

pub mod factory;
pub mod traits;

pub use factory::create_dimension_loaders;
pub use traits::{DimensionLoader, DimensionLoaders};
