//! Configuration management.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SALES_ETL_*` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [[sources]]
//! type = "csv"
//! name = "store-export"
//! directory = "data/csv"
//!
//! [[sources]]
//! type = "api"
//! name = "pos"
//! url = "https://pos.example.com/api/sales"
//! token = "${POS_API_TOKEN}"
//!
//! [postgresql]
//! connection_string = "${DW_CONNECTION_STRING}"
//! max_connections = 10
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! ```
//!
//! ```rust,no_run
//! use sales_etl::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sales-etl.toml")?;
//! for source in &config.sources {
//!     println!("source: {}", source.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApiSourceConfig, ApplicationConfig, CsvSourceConfig, EtlConfig, JsonSourceConfig,
    LoggingConfig, PostgreSQLConfig, SourceConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
