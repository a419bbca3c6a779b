//! HTTP transport abstraction
//!
//! `JsonHttpClient` never talks to `reqwest` directly; it hands a
//! [`HttpTransportRequest`] to an injectable [`HttpTransport`] and gets back a
//! fully-read [`HttpTransportResponse`]. [`ReqwestTransport`] is the production
//! implementation; tests plug in in-memory transports.

use crate::error::JsonHttpError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Transport-level request data for GET requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    /// Correlates log lines of one call.
    pub request_id: String,
    pub url: String,
    pub headers: HeaderMap,
}

/// Transport-level response data. The body has already been read in full.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpTransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Custom HTTP transport for GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpTransportRequest)
    -> Result<HttpTransportResponse, JsonHttpError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, JsonHttpError> {
        let resp = self
            .client
            .get(&request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// Unique id for a single request, used only for log correlation.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, HeaderValue};

    fn request(url: String, headers: HeaderMap) -> HttpTransportRequest {
        HttpTransportRequest {
            request_id: generate_request_id(),
            url,
            headers,
        }
    }

    #[tokio::test]
    async fn reqwest_transport_reads_status_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/forecast")
            .match_header("authorization", "Bearer abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"cnt":40}"#)
            .create_async()
            .await;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));

        let transport = ReqwestTransport::default();
        let resp = transport
            .get(request(format!("{}/forecast", server.url()), headers))
            .await
            .unwrap();

        assert!(resp.is_success());
        assert_eq!(resp.status_code(), Some(StatusCode::OK));
        assert_eq!(resp.headers.get("content-type").unwrap(), "application/json");
        assert_eq!(resp.text(), r#"{"cnt":40}"#);
    }

    #[tokio::test]
    async fn non_success_status_is_not_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let resp = ReqwestTransport::default()
            .get(request(format!("{}/missing", server.url()), HeaderMap::new()))
            .await
            .unwrap();

        assert!(!resp.is_success());
        assert_eq!(resp.status, 404);
        assert_eq!(resp.text(), "not found");
    }

    #[test]
    fn lossy_text_replaces_invalid_utf8() {
        let resp = HttpTransportResponse::new(500, vec![b'o', b'k', 0xff]);
        assert_eq!(resp.text(), "ok\u{fffd}");
        assert!(!resp.is_success());
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }
}
