//! [`HttpClient`] over a shared `reqwest::Client`.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::RequestBuilder;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Production transport for the bot backend.
///
/// The default client has no overall request timeout: a bot run can keep
/// the `/run-bot` request open for minutes.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn send(request: RequestBuilder, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(request, |request, (name, value)| request.header(name, value));
        let reply = request.send().await.map_err(transport_error)?;

        let status = reply.status().as_u16();
        let reply_headers = header_map_to_headers(reply.headers());
        let body = reply.bytes().await.map_err(transport_error)?;
        Ok(Response {
            status,
            headers: reply_headers,
            body,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        Self::send(self.client.get(url), headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        Self::send(self.client.post(url).body(body.to_owned()), headers).await
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    let detail = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(detail)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(detail)
    } else if err.is_builder() {
        HttpError::InvalidUrl(detail)
    } else if err.is_body() || err.is_decode() {
        HttpError::Io(detail)
    } else {
        HttpError::Other(detail)
    }
}

/// Non-UTF-8 header values are dropped.
fn header_map_to_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_header_map_skips_opaque_values() {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        map.insert("x-raw", HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());

        let headers = header_map_to_headers(&map);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn test_relative_url_is_rejected_before_sending() {
        let client = ReqwestHttpClient::new();
        let result = client.post("run-bot", "{}", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_)) | Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_closed_port_is_a_transport_error() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post("http://127.0.0.1:59999/run-bot", "{}", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }
}
