//! Error types for roster

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A mutation was handed no person payload. Distinct from the boolean
    /// "target not found" results, which are not errors.
    #[error("Person payload is required")]
    MissingPerson,

    #[error("Year must be between 0 and {max}, got {year}")]
    YearOutOfRange { year: i32, max: i32 },

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
