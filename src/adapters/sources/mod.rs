//! Extraction sources
//!
//! Trait-based source abstraction plus the concrete sources:
//! - [`CsvSource`] - directory of CSV files, the enriched variant
//! - [`JsonFileSource`] - JSON array of sales records on disk
//! - [`HttpApiSource`] - JSON array of sales records over HTTP

pub mod csv_dir;
pub mod factory;
pub mod http_api;
pub mod json_file;
pub mod traits;

pub use csv_dir::CsvSource;
pub use factory::create_sources;
pub use http_api::HttpApiSource;
pub use json_file::JsonFileSource;
pub use traits::{DimensionalSource, FactSource, Source, SourceKind};
