//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use super::records::Dimension;
use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source extraction errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Warehouse (dimension loading) errors
    #[error("Warehouse error: {0}")]
    Warehouse(#[from] WarehouseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by a source while extracting
#[derive(Debug, Error)]
pub enum SourceError {
    /// Input file or directory is missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file could not be read
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// A row or document could not be parsed
    #[error("Failed to parse {file} (row {row}): {message}")]
    Parse {
        file: String,
        row: u64,
        message: String,
    },

    /// HTTP request could not be sent or completed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Payload had an unexpected shape
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Errors raised by the warehouse while loading dimensions
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// Could not obtain a connection
    #[error("Failed to connect to warehouse: {0}")]
    ConnectionFailed(String),

    /// Schema bootstrap failed
    #[error("Failed to initialize schema: {0}")]
    SchemaFailed(String),

    /// Writing a dimension failed
    #[error("Failed to load {dimension} dimension: {message}")]
    LoadFailed {
        dimension: Dimension,
        message: String,
    },

    /// Statement execution failed outside of a load
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for EtlError {
    fn from(err: std::io::Error) -> Self {
        EtlError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for EtlError {
    fn from(err: serde_json::Error) -> Self {
        EtlError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for EtlError {
    fn from(err: toml::de::Error) -> Self {
        EtlError::Configuration(format!("TOML parse error: {err}"))
    }
}
