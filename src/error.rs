//! Error types for Seqdex.
//!
//! Matching and ingestion are total operations: querying an unknown
//! sequence yields an empty result rather than an error. Errors only arise
//! while building or configuring a collector.

use thiserror::Error;

/// The main error type for Seqdex operations.
#[derive(Error, Debug)]
pub enum SeqdexError {
    /// The collector configuration is not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An argument passed to an operation is not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON (de)serialization of a configuration failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeqdexError {
    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SeqdexError::InvalidConfig(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SeqdexError::InvalidArgument(msg.into())
    }
}

/// Result type alias for operations that may fail with [`SeqdexError`].
pub type Result<T> = std::result::Result<T, SeqdexError>;
