//! Backend reachability probe.
//!
//! Runs in the background when the TUI starts (shown in the footer) and
//! backs the `jobbot ping` command.

use crate::backend::BotBackend;
use crate::error::BotError;

/// Result of a health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckResult {
    /// Backend answered `GET /` with a 2xx status
    pub reachable: bool,
    /// HTTP status, if the backend answered at all
    pub status: Option<u16>,
    pub response_time_ms: Option<u64>,
    pub error_message: Option<String>,
    pub hint: Option<&'static str>,
}

impl HealthCheckResult {
    fn unreachable(message: String, hint: &'static str) -> Self {
        Self {
            reachable: false,
            status: None,
            response_time_ms: None,
            error_message: Some(message),
            hint: Some(hint),
        }
    }
}

/// Probe the backend root once.
pub async fn run_health_check(backend: &BotBackend) -> HealthCheckResult {
    match backend.ping().await {
        Ok(reply) => {
            tracing::debug!(status = reply.status, ms = reply.elapsed_ms, "Backend probe answered");
            HealthCheckResult {
                reachable: reply.is_healthy(),
                status: Some(reply.status),
                response_time_ms: Some(reply.elapsed_ms),
                error_message: (!reply.is_healthy())
                    .then(|| format!("backend answered HTTP {}", reply.status)),
                hint: None,
            }
        }
        Err(BotError::Network(err)) => {
            tracing::warn!(code = err.error_code(), error = %err, "Backend probe failed");
            let hint = err.hint();
            HealthCheckResult::unreachable(err.to_string(), hint)
        }
        Err(err) => {
            tracing::warn!(code = err.error_code(), error = %err, "Backend probe failed");
            HealthCheckResult::unreachable(err.to_string(), "Unexpected reply from the backend.")
        }
    }
}

/// Print health check results for `jobbot ping`.
pub fn display_health_check_results(result: &HealthCheckResult, base_url: &str) {
    println!();
    if result.reachable {
        match result.response_time_ms {
            Some(ms) => println!("✓ Backend at {} responding ({}ms)", base_url, ms),
            None => println!("✓ Backend at {} responding", base_url),
        }
    } else {
        println!("✗ Backend at {} not responding", base_url);
        if let Some(ref message) = result.error_message {
            println!("  {}", message);
        }
        if let Some(hint) = result.hint {
            println!("  {}", hint);
        }
    }
    println!();
}
