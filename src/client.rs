//! JSON-over-HTTP client
//!
//! [`JsonHttpClient`] issues GET requests through an [`HttpTransport`] and
//! decodes the JSON body into a caller-chosen type. HTTP-level failures never
//! become `Err`: the response text goes to an [`ErrorLogger`] and the result is
//! `T::default()`. Only configuration and JSON decode problems are returned as
//! errors.
//!
//! ```rust,ignore
//! let client = JsonHttpClient::new()?;
//! let forecast: serde_json::Value = client
//!     .get_json(url, None, Some(&TracingLogger::new()))
//!     .await?;
//! ```

use crate::codec::deserialize_json_from_slice;
use crate::config::{HttpConfig, build_http_client_from_config};
use crate::error::Result;
use crate::headers::{bearer_header_value, format_headers_for_logging, merge_headers};
use crate::logger::{ErrorLogger, NullLogger};
use crate::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
    generate_request_id,
};
use reqwest::header::{AUTHORIZATION, HeaderMap};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Typed GET helpers over an injectable HTTP transport.
#[derive(Clone)]
pub struct JsonHttpClient {
    transport: Arc<dyn HttpTransport>,
    default_headers: HeaderMap,
}

impl JsonHttpClient {
    /// Client with the default [`HttpConfig`].
    pub fn new() -> Result<Self> {
        Self::from_config(&HttpConfig::default())
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let http = build_http_client_from_config(config)?;
        Ok(Self::with_http_client(http))
    }

    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(http)))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            default_headers: HeaderMap::new(),
        }
    }

    /// Headers attached to every request made by this instance.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Send `Authorization: Bearer <token>` on every later request made by this
    /// instance. Clones taken before the call are unaffected.
    pub fn set_bearer_token(&mut self, token: &str) -> Result<()> {
        self.default_headers
            .insert(AUTHORIZATION, bearer_header_value(token)?);
        Ok(())
    }

    pub fn with_bearer_token(mut self, token: &str) -> Result<Self> {
        self.set_bearer_token(token)?;
        Ok(self)
    }

    /// GET `url` and decode the JSON body into `T`.
    ///
    /// A non-blank `token` is sent as a bearer token for this request only.
    /// On a non-success status, or when the request cannot be sent at all, the
    /// error text is passed to `logger` (default [`NullLogger`]) and
    /// `T::default()` is returned. A success body that is not valid JSON for
    /// `T` yields [`JsonHttpError::Decode`](crate::error::JsonHttpError::Decode).
    pub async fn get_json<T>(
        &self,
        url: &str,
        token: Option<&str>,
        logger: Option<&dyn ErrorLogger>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let token = token.filter(|t| !t.trim().is_empty());
        self.get_json_inner(url, token, logger.unwrap_or(NullLogger::INSTANCE))
            .await
    }

    /// GET a component resource with `token`, discarding failure details.
    pub async fn get_from_component<T>(&self, url: &str, token: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.get_json_inner(url, Some(token), NullLogger::INSTANCE)
            .await
    }

    async fn get_json_inner<T>(
        &self,
        url: &str,
        token: Option<&str>,
        logger: &dyn ErrorLogger,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let headers = self.request_headers(token)?;
        let request_id = generate_request_id();
        debug!(
            request_id = %request_id,
            url = %url,
            headers = %format_headers_for_logging(&headers),
            "GET request started"
        );

        let start = Instant::now();
        let request = HttpTransportRequest {
            request_id: request_id.clone(),
            url: url.to_string(),
            headers,
        };
        let response = match self.transport.get(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    url = %url,
                    error = %e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "GET request could not be completed"
                );
                logger.log_error(&e.to_string());
                return Ok(T::default());
            }
        };

        debug!(
            request_id = %request_id,
            status = response.status,
            body_len = response.body.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "GET request completed"
        );
        read_json_response(response, logger)
    }

    fn request_headers(&self, token: Option<&str>) -> Result<HeaderMap> {
        let Some(token) = token else {
            return Ok(self.default_headers.clone());
        };
        let mut per_request = HeaderMap::new();
        per_request.insert(AUTHORIZATION, bearer_header_value(token)?);
        Ok(merge_headers(self.default_headers.clone(), &per_request))
    }
}

impl std::fmt::Debug for JsonHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonHttpClient")
            .field(
                "default_headers",
                &format_headers_for_logging(&self.default_headers),
            )
            .finish_non_exhaustive()
    }
}

/// Decode a transport response.
///
/// Success: the body is decoded as JSON (empty body gives `T::default()`).
/// Anything else: the body text is logged and `T::default()` is returned.
pub fn read_json_response<T>(response: HttpTransportResponse, logger: &dyn ErrorLogger) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if response.is_success() {
        return deserialize_json_from_slice(&response.body);
    }

    let text = response.text();
    warn!(status = response.status, "GET request returned non-success status");
    logger.log_error(&text);
    Ok(T::default())
}
