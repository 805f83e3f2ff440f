//! Domain error types
//!
//! This module defines the error hierarchy for Hemodash. All errors are
//! domain-specific and don't expose third-party types: the HTTP client's
//! failures are classified into [`FetchError`] at the adapter boundary.

use thiserror::Error;

/// Main Hemodash error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum HemodashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Fetch errors from the remote data source
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Retry budget exhausted for a fetch cycle
    ///
    /// Carries the last underlying cause as a display string; downstream
    /// code never branches on the specific cause.
    #[error("Fetch cycle exhausted after {attempts} attempts: {cause}")]
    Exhausted { attempts: u32, cause: String },

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

/// Failure classification for a single remote call
///
/// Errors that occur when fetching one resource from the dashboard API.
/// These don't expose the HTTP client's own error types.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The call exceeded its deadline
    #[error("Request timeout fetching {resource}")]
    Timeout { resource: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {resource}")]
    HttpStatus { status: u16, resource: String },

    /// The call failed below the HTTP layer (DNS, connect, TLS, ...)
    #[error("Transport error fetching {resource}: {message}")]
    Transport { resource: String, message: String },

    /// The payload was not valid structured data
    #[error("Decode error for {resource}: {message}")]
    Decode { resource: String, message: String },
}

impl FetchError {
    /// The logical resource this failure belongs to
    pub fn resource(&self) -> &str {
        match self {
            FetchError::Timeout { resource }
            | FetchError::HttpStatus { resource, .. }
            | FetchError::Transport { resource, .. }
            | FetchError::Decode { resource, .. } => resource,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for HemodashError {
    fn from(err: std::io::Error) -> Self {
        HemodashError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HemodashError {
    fn from(err: serde_json::Error) -> Self {
        HemodashError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HemodashError {
    fn from(err: toml::de::Error) -> Self {
        HemodashError::Configuration(format!("TOML parse error: {err}"))
    }
}
