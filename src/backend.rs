//! Client for the job bot backend.
//!
//! The backend is an opaque automation service with two routes:
//! `POST /run-bot` runs the bot and `GET /` answers when it is up.

use std::sync::Arc;
use std::time::Instant;

use crate::adapters::ReqwestHttpClient;
use crate::error::{classify_http_error, BotError, BotResult};
use crate::models::{BackendReply, ResponseResult, RunBotRequest};
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const RUN_BOT_PATH: &str = "/run-bot";

/// Answer to a reachability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingReply {
    pub status: u16,
    pub elapsed_ms: u64,
    healthy: bool,
}

impl PingReply {
    /// The root answered with a 2xx status.
    pub fn is_healthy(&self) -> bool {
        self.healthy
    }
}

/// Client for the job bot backend.
///
/// Cheap to clone: the HTTP client is shared.
#[derive(Clone)]
pub struct BotBackend {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl BotBackend {
    /// Create a client over any [`HttpClient`]. A trailing slash on the base
    /// URL is dropped.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Create a client backed by reqwest.
    pub fn with_reqwest(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn run_bot_url(&self) -> String {
        format!("{}{}", self.base_url, RUN_BOT_PATH)
    }

    /// POST the form to `/run-bot` and decode the reply.
    ///
    /// The body is decoded whatever the HTTP status: the backend reports
    /// failures (400, 401, 500) as `{"success": false, "error": ...}`.
    pub async fn run_bot(&self, request: &RunBotRequest) -> BotResult<BackendReply> {
        let url = self.run_bot_url();
        let body = request.to_json()?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::info!(
            url = %url,
            body_len = body.len(),
            "Dispatching run-bot request"
        );

        let response = self
            .http
            .post(&url, &body, &headers)
            .await
            .map_err(|e| classify_http_error(&e, &url))?;

        let reply = response
            .json::<serde_json::Value>()
            .map(BackendReply::from_value)
            .map_err(|source| BotError::InvalidReply {
                status: response.status,
                source,
            })?;

        tracing::info!(
            status = response.status,
            content_type = response.header("content-type"),
            success = reply.is_success(),
            message = reply.message_text().as_deref(),
            "Backend replied"
        );
        Ok(reply)
    }

    /// Run the bot and collapse every failure into the fallback result.
    ///
    /// `None` when the backend answered with a falsy JSON value.
    pub async fn submit(&self, request: &RunBotRequest) -> Option<ResponseResult> {
        match self.run_bot(request).await {
            Ok(reply) => reply.into_result(),
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "Submission failed");
                Some(ResponseResult::Fallback)
            }
        }
    }

    /// Probe `GET /`.
    pub async fn ping(&self) -> BotResult<PingReply> {
        let url = format!("{}/", self.base_url);
        let start = Instant::now();

        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| classify_http_error(&e, &url))?;

        Ok(PingReply {
            status: response.status,
            healthy: response.is_success(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl std::fmt::Debug for BotBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotBackend")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
