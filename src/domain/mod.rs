//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Fact and dimension records** ([`SalesRecord`], [`CustomerRecord`], [`ProductRecord`], [`OrderRecord`])
//! - **The enriched extraction output** ([`ExtractionBundle`])
//! - **Error types** ([`EtlError`], [`SourceError`], [`WarehouseError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, EtlError>`]:
//!
//! ```rust,no_run
//! use sales_etl::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = sales_etl::config::load_config("sales-etl.toml")?;
//!     Ok(())
//! }
//! ```

pub mod bundle;
pub mod errors;
pub mod records;
pub mod result;

pub use bundle::{BundleCounts, ExtractionBundle};
pub use errors::{EtlError, SourceError, WarehouseError};
pub use records::{CustomerRecord, Dimension, OrderRecord, ProductRecord, SalesRecord};
pub use result::Result;
