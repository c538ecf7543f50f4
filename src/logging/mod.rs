//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Configurable log levels
//! - Console output
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use sales_etl::logging::init_logging;
//! use sales_etl::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the records a source contributed to the run
///
/// # Example
///
/// ```no_run
/// use sales_etl::log_source_extracted;
///
/// log_source_extracted!("legacy-json", 120);
/// ```
#[macro_export]
macro_rules! log_source_extracted {
    ($source:expr, $count:expr) => {
        tracing::info!(
            source = %$source,
            count = $count,
            "Source extracted records"
        );
    };
}

/// Log a completed dimension load
///
/// # Example
///
/// ```no_run
/// use sales_etl::log_dimension_loaded;
/// use sales_etl::domain::Dimension;
///
/// log_dimension_loaded!(Dimension::Customer, 42, 42);
/// ```
#[macro_export]
macro_rules! log_dimension_loaded {
    ($dimension:expr, $records:expr, $written:expr) => {
        tracing::info!(
            dimension = %$dimension,
            records = $records,
            written = $written,
            "Dimension loaded"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use sales_etl::log_error_with_context;
/// use sales_etl::domain::EtlError;
///
/// let error = EtlError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            detail = ?$error,
            context = $context,
            "Error occurred"
        );
    };
}
