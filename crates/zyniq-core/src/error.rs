//! Error types for the ZYNIQ blueprint service.

use thiserror::Error;

use crate::structured::ParseError;

/// Result type alias using the service's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ZYNIQ operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Persistence operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The language model provider could not produce a usable reply
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider reply was not decodable into the expected record
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True when the error originated in the persistence layer.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Database(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::ProviderUnavailable(format!("request timed out: {}", e))
        } else {
            Error::ProviderUnavailable(e.to_string())
        }
    }
}
