//! Error handling module for GeoPeek
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for GeoPeek
#[derive(Error, Debug)]
pub enum GeopeekError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset catalog errors (CSV reading, deserialization)
    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    /// Catalog content errors (missing columns, unusable files)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// HTTP transport errors (connect, timeout, non-2xx status)
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Identify URL construction errors
    #[error("Invalid lookup URL: {0}")]
    Url(String),

    /// Lookup failures reported back from a worker thread
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (invalid wizard interactions)
    #[error("State error: {0}")]
    State(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for GeoPeek operations
pub type Result<T> = std::result::Result<T, GeopeekError>;

// Convenient error constructors
impl GeopeekError {
    /// Create a catalog content error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a lookup URL error
    pub fn url(msg: impl Into<String>) -> Self {
        Self::Url(msg.into())
    }

    /// Create a lookup failure error
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> GeopeekError {
    GeopeekError::General(msg.into())
}
