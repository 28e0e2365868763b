//! `jobbot ping`: report whether the backend answers.

use crate::backend::BotBackend;
use crate::health_check::{display_health_check_results, run_health_check};

/// Probe once, print the result, and return the exit status.
pub async fn handle_ping_command(backend: &BotBackend) -> i32 {
    let result = run_health_check(backend).await;
    display_health_check_results(&result, backend.base_url());
    if result.reachable {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unreachable_backend_exits_1() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::Timeout("5s".to_string())));
        let backend = BotBackend::new("http://localhost:5000", Arc::new(mock));
        assert_eq!(handle_ping_command(&backend).await, 1);
    }

    #[tokio::test]
    async fn test_reachable_backend_exits_0() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(r#"{"status": "ok"}"#));
        let backend = BotBackend::new("http://localhost:5000", Arc::new(mock));
        assert_eq!(handle_ping_command(&backend).await, 0);
    }
}
