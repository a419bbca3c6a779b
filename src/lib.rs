//! json-http-client
//!
//! JSON helpers over an async HTTP client: typed GET with optional bearer
//! token, JSON request bodies, and UTC web date formatting.
//!
//! ```rust,ignore
//! use json_http_client::prelude::*;
//!
//! let client = JsonHttpClient::new()?;
//! let value: serde_json::Value = client
//!     .get_json("https://example.com/data.json", Some("token"), Some(&TracingLogger::new()))
//!     .await?;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod codec;
pub mod config;
pub mod dates;
pub mod defaults;
pub mod error;
pub mod headers;
pub mod logger;
pub mod telemetry;
pub mod transport;

pub use client::{JsonHttpClient, read_json_response};
pub use codec::{
    JsonBody, create_json_body, deserialize_json_from_reader, deserialize_json_from_slice,
    serialize_json_to_stream, serialize_json_to_string, serialize_json_to_writer,
};
pub use config::{HttpConfig, HttpConfigBuilder, build_http_client_from_config};
pub use dates::{ensure_utc, ensure_utc_naive, utc_web_date};
pub use error::{JsonHttpError, Result};
pub use logger::{ErrorLogger, NullLogger, TracingLogger};
pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport};

/// Commonly used items
pub mod prelude {
    pub use crate::client::JsonHttpClient;
    pub use crate::codec::{JsonBody, create_json_body, serialize_json_to_stream};
    pub use crate::dates::{ensure_utc, utc_web_date};
    pub use crate::error::JsonHttpError;
    pub use crate::logger::{ErrorLogger, NullLogger, TracingLogger};
}
