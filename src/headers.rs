//! HTTP header helpers
//!
//! Builds the header maps attached to outgoing requests and masks
//! credentials before headers reach the logs.

use crate::error::JsonHttpError;
use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use std::collections::HashMap;

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Start from an existing header map
    pub fn from_headers(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, JsonHttpError> {
        self.headers.insert(AUTHORIZATION, bearer_header_value(token)?);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(crate::defaults::http::JSON_CONTENT_TYPE),
        );
        self
    }

    /// Add user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, JsonHttpError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| JsonHttpError::Configuration(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, JsonHttpError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, JsonHttpError> {
        for (key, value) in custom_headers {
            let (name, value) = parse_header(key, value)?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `Authorization` value for a bearer token, marked sensitive.
pub fn bearer_header_value(token: &str) -> Result<HeaderValue, JsonHttpError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| JsonHttpError::Configuration(format!("Invalid bearer token format: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), JsonHttpError> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        JsonHttpError::Configuration(format!("Invalid header name '{name}': {e}"))
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| {
        JsonHttpError::Configuration(format!("Invalid header value for '{name}': {e}"))
    })?;
    Ok((header_name, header_value))
}

/// Merge `extra` into `base`; `extra` wins on conflicting names.
pub fn merge_headers(mut base: HeaderMap, extra: &HeaderMap) -> HeaderMap {
    for (name, value) in extra {
        base.insert(name.clone(), value.clone());
    }
    base
}

/// Mask a credential so only its edges are visible.
pub fn mask_sensitive_value(value: &str) -> String {
    if let Some(token) = value.strip_prefix("Bearer ") {
        if token.len() > 8 {
            return format!("Bearer {}...{}", &token[..4], &token[token.len() - 4..]);
        }
        return "Bearer ***".to_string();
    }
    if value.len() > 16 {
        format!("{}...{}", &value[..6], &value[value.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Render headers for a log line, masking anything that looks like a credential.
pub fn format_headers_for_logging(headers: &HeaderMap) -> String {
    let map: HashMap<&str, String> = headers
        .iter()
        .map(|(k, v)| {
            let value = v.to_str().unwrap_or("<invalid>");
            let name = k.as_str();
            let masked = if v.is_sensitive()
                || name.contains("authorization")
                || name.contains("key")
                || name.contains("token")
            {
                mask_sensitive_value(value)
            } else {
                value.to_string()
            };
            (name, masked)
        })
        .collect();
    serde_json::to_string(&map).unwrap_or_else(|_| format!("{map:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("test-token")
            .unwrap()
            .with_json_content_type()
            .with_user_agent("test-agent")
            .unwrap()
            .build();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "test-agent");
    }

    #[test]
    fn bearer_with_newline_is_rejected() {
        let err = HttpHeaderBuilder::new()
            .with_bearer_auth("abc\ndef")
            .err()
            .expect("newline is not a valid header value");
        assert!(matches!(err, JsonHttpError::Configuration(_)));
    }

    #[test]
    fn merge_headers_overrides_existing_values() {
        let base = HttpHeaderBuilder::new()
            .with_header("x-tenant", "a")
            .unwrap()
            .with_header("x-keep", "1")
            .unwrap()
            .build();
        let extra = HttpHeaderBuilder::new()
            .with_header("X-Tenant", "b")
            .unwrap()
            .build();

        let merged = merge_headers(base, &extra);
        assert_eq!(merged.get("x-tenant").unwrap(), "b");
        assert_eq!(merged.get("x-keep").unwrap(), "1");
    }

    #[test]
    fn logged_headers_mask_tokens() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("abcdefghijklmnop")
            .unwrap()
            .with_header("accept", "application/json")
            .unwrap()
            .build();
        let rendered = format_headers_for_logging(&headers);
        assert!(rendered.contains("Bearer abcd...mnop"));
        assert!(!rendered.contains("abcdefghijklmnop"));
        assert!(rendered.contains("application/json"));
    }

    #[test]
    fn short_secrets_are_fully_masked() {
        assert_eq!(mask_sensitive_value("Bearer abc"), "Bearer ***");
        assert_eq!(mask_sensitive_value("short"), "***");
    }
}
