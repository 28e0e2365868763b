//! Recording [`HttpClient`] double.
//!
//! Replies are scripted per URL, every request is recorded, and a test can
//! hold requests in flight to observe the form while a submission is pending.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// `None` for GET.
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.body.as_deref()?).ok()
    }
}

/// A scripted outcome for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self::json_with_status(200, body)
    }

    pub fn json_with_status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::json_body(status, body))
    }
}

/// Releases requests held by [`MockHttpClient::hold`], one per call.
#[derive(Debug, Clone)]
pub struct MockGate {
    semaphore: Arc<Semaphore>,
}

impl MockGate {
    pub fn release(&self) {
        self.semaphore.add_permits(1);
    }
}

#[derive(Debug, Default)]
struct MockState {
    by_url: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    seen: Vec<RecordedRequest>,
    gate: Option<Arc<Semaphore>>,
}

impl MockState {
    /// Exact URL, then longest configured prefix, then the fallback.
    fn lookup(&self, url: &str) -> Option<MockResponse> {
        if let Some(hit) = self.by_url.get(url) {
            return Some(hit.clone());
        }
        self.by_url
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, reply)| reply.clone())
            .or_else(|| self.fallback.clone())
    }
}

/// Scriptable HTTP client. Clones share their script and their log.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response(
///     "http://localhost:5000/run-bot",
///     MockResponse::json(r#"{"success": true}"#),
/// );
/// let gate = http.hold();
/// // submit: the request is recorded but does not return yet
/// gate.release();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A test that panicked mid-lock still leaves usable state
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.state().by_url.insert(url.to_string(), response);
    }

    /// Reply for URLs with no scripted match.
    pub fn set_default_response(&self, response: MockResponse) {
        self.state().fallback = Some(response);
    }

    /// From now on, each request waits for one [`MockGate::release`].
    pub fn hold(&self) -> MockGate {
        let semaphore = Arc::new(Semaphore::new(0));
        self.state().gate = Some(semaphore.clone());
        MockGate { semaphore }
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.state().seen.clone()
    }

    pub fn clear_requests(&self) {
        self.state().seen.clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.state().seen.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    async fn respond(&self, url: &str) -> Result<Response, HttpError> {
        let gate = self.state().gate.clone();
        if let Some(semaphore) = gate {
            semaphore
                .acquire()
                .await
                .map_err(|_| HttpError::Cancelled)?
                .forget();
        }

        match self.state().lookup(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no scripted reply for {url}"))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond(url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond(url).await
    }
}
