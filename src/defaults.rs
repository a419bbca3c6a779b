//! Default Configuration Values
//!
//! Centralizes the default values used throughout the crate.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("json-http-client/", env!("CARGO_PKG_VERSION"));

    /// Media type attached to JSON request bodies
    pub const JSON_CONTENT_TYPE: &str = "application/json";
}

/// Date formatting defaults
pub mod dates {
    /// `chrono` format string for `yyyy-MM-ddTHH:mm:ss.fffZ`
    pub const WEB_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
}

/// Environment variables read by [`crate::telemetry::init_from_env`]
pub mod env {
    /// Log level (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "JSON_HTTP_LOG_LEVEL";

    /// Output format (text, json, json-compact)
    pub const LOG_FORMAT: &str = "JSON_HTTP_LOG_FORMAT";

    /// Optional log file path
    pub const LOG_FILE: &str = "JSON_HTTP_LOG_FILE";
}
