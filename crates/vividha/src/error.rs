//! Error types for the Vividha data layer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vividha operations.
#[derive(Debug, Error)]
pub enum VividhaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no columns to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Error writing to the artifact registry.
    #[error("Registry error: {0}")]
    Registry(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vividha operations.
pub type Result<T> = std::result::Result<T, VividhaError>;
