//! The HTTP seam between the job bot backend and the network.
//!
//! [`BotBackend`](crate::backend::BotBackend) only ever talks to an
//! [`HttpClient`]; production wires in reqwest, tests wire in the recording
//! mock from `crate::adapters::mock`.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Request/response headers. Names are stored as given.
pub type Headers = HashMap<String, String>;

/// A fully-read HTTP reply.
///
/// Any status is a valid `Response`; a 4xx from the bot backend still
/// carries the JSON body the form needs to display.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body,
        }
    }

    /// Reply with `content-type: application/json` and the given text.
    pub fn json_body(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, Bytes::from(body.into()))
            .header_set("content-type", "application/json")
    }

    fn header_set(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON, whatever the status.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures. A reply with a bad status is not one of these.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Request cancelled")]
    Cancelled,

    /// The reply started but its body could not be read.
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Minimal async HTTP surface used by the backend client.
///
/// ```ignore
/// async fn backend_up(client: &dyn HttpClient, base: &str) -> bool {
///     matches!(client.get(base, &Headers::new()).await, Ok(r) if r.is_success())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// POST `body` verbatim; the caller sets `Content-Type`.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_is_tagged_as_json() {
        let reply = Response::json_body(400, r#"{"success":false}"#);
        assert_eq!(reply.status, 400);
        assert_eq!(reply.header("Content-Type"), Some("application/json"));
        assert_eq!(reply.body, Bytes::from(r#"{"success":false}"#));
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let reply = Response::new(200, Bytes::new()).header_set("X-Request-Id", "abc");
        assert_eq!(reply.header("x-request-id"), Some("abc"));
        assert_eq!(reply.header("missing"), None);
    }

    #[test]
    fn test_only_2xx_is_success() {
        for (status, ok) in [(200, true), (204, true), (302, false), (401, false), (500, false)] {
            assert_eq!(Response::new(status, Bytes::new()).is_success(), ok, "{status}");
        }
    }

    #[test]
    fn test_json_decodes_regardless_of_status() {
        let reply = Response::json_body(401, r#"{"success":false,"error":"bad login"}"#);
        let value: serde_json::Value = reply.json().unwrap();
        assert_eq!(value["error"], "bad login");
    }

    #[test]
    fn test_json_rejects_html_error_page() {
        let reply = Response::new(502, Bytes::from("<html>Bad Gateway</html>"));
        assert!(reply.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_http_error_messages() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".into()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(HttpError::Cancelled.to_string(), "Request cancelled");
        assert_eq!(HttpError::Other("boom".into()).to_string(), "HTTP error: boom");
    }
}
