//! Error types for geometry generation and configuration

use thiserror::Error;

/// Result type for fallible lab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
