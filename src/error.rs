//! Error types for json-http-client
//!
//! Only configuration, encoding and decoding problems surface as errors.
//! HTTP-level failures (non-success status, unreachable host) are reported
//! through an [`ErrorLogger`](crate::logger::ErrorLogger) and the typed result
//! falls back to `T::default()`.

use thiserror::Error;

/// Errors that can occur in json-http-client
#[derive(Error, Debug)]
pub enum JsonHttpError {
    /// Transport failure (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body is not valid JSON for the requested type
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Value could not be serialized to JSON
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Sink write or seek failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid header, proxy or client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Tracing subscriber could not be installed
    #[error("Telemetry initialization error: {0}")]
    TelemetryInit(String),
}

impl JsonHttpError {
    /// Whether the error comes from the network rather than from local data.
    pub fn is_transport(&self) -> bool {
        matches!(self, JsonHttpError::Http(_))
    }
}

impl From<reqwest::Error> for JsonHttpError {
    fn from(err: reqwest::Error) -> Self {
        JsonHttpError::Http(err.to_string())
    }
}

/// Result type for json-http-client operations
pub type Result<T> = std::result::Result<T, JsonHttpError>;
