//! End-to-end form flow: App + reducer + backend over a mock HTTP client.

mod common;

use common::*;
use jobbot::adapters::{MockHttpClient, MockResponse};
use jobbot::app::{AppMessage, Focus};
use jobbot::models::{FormField, ResponseResult, FALLBACK_ERROR};
use jobbot::state::Phase;
use jobbot::traits::HttpError;
use serde_json::json;

#[tokio::test]
async fn test_submit_posts_form_once_as_json() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json(r#"{"success": true}"#));
    let mut app = filled_app(&mock);

    assert!(app.submit());
    settle_next(&mut app).await;

    let requests = mock.get_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, RUN_BOT_URL);
    assert_eq!(
        requests[0].headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        requests[0].json_body(),
        Some(json!({
            "linkedinEmail": "li@example.com",
            "linkedinPassword": "li-secret",
            "userEmail": "me@example.com",
            "emailPassword": "app-secret",
            "keywords": "Software Engineer, Entry Level",
        }))
    );
}

#[tokio::test]
async fn test_control_disabled_while_in_flight() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json(r#"{"success": true}"#));
    let gate = mock.hold();
    let mut app = filled_app(&mock);

    assert!(app.submit());
    wait_for_requests(&mock, 1).await;

    assert!(app.is_loading());
    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains("Running Bot..."));
    assert!(!screen.contains("[ Run Bot ]"));

    gate.release();
    settle_next(&mut app).await;

    assert!(!app.is_loading());
    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains("[ Run Bot ]"));
    assert!(!screen.contains("Running Bot..."));
}

#[tokio::test]
async fn test_second_submit_in_flight_issues_no_request() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json(r#"{"success": true}"#));
    let gate = mock.hold();
    let mut app = filled_app(&mock);

    assert!(app.submit());
    wait_for_requests(&mock, 1).await;
    let before = app.snapshot.clone();

    assert!(!app.submit());
    app.set_focus(Focus::Submit);
    app.handle_key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Enter,
        crossterm::event::KeyModifiers::NONE,
    ));
    assert_eq!(app.snapshot, before);

    gate.release();
    settle_next(&mut app).await;
    assert_eq!(mock.get_requests().len(), 1);
}

#[tokio::test]
async fn test_success_renders_success_message() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json(r#"{"success": true}"#));
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;

    assert_eq!(app.snapshot.result, Some(ResponseResult::Success { message: None }));
    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains("✅"));
    assert!(screen.contains("Bot finished successfully!"));
    assert!(!screen.contains("❌"));
}

#[tokio::test]
async fn test_backend_failure_renders_server_error() {
    let mock = MockHttpClient::new();
    mock.set_response(
        RUN_BOT_URL,
        MockResponse::json_with_status(401, r#"{"success": false, "error": "bad login"}"#),
    );
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;

    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains("❌"));
    assert!(screen.contains("bad login"));
}

#[tokio::test]
async fn test_network_failure_renders_fallback_only() {
    let mock = MockHttpClient::new();
    mock.set_response(
        RUN_BOT_URL,
        MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
    );
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;

    assert_eq!(app.snapshot.result, Some(ResponseResult::Fallback));
    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains(FALLBACK_ERROR));
    assert!(!screen.contains("refused"));
}

#[tokio::test]
async fn test_non_json_body_renders_fallback() {
    let mock = MockHttpClient::new();
    mock.set_response(
        RUN_BOT_URL,
        MockResponse::json_with_status(502, "<html>Bad Gateway</html>"),
    );
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;

    assert_eq!(app.snapshot.result, Some(ResponseResult::Fallback));
}

#[tokio::test]
async fn test_edit_after_result_keeps_result_and_other_fields() {
    let mock = MockHttpClient::new();
    mock.set_response(
        RUN_BOT_URL,
        MockResponse::json(r#"{"success": false, "error": "bad login"}"#),
    );
    let mut app = filled_app(&mock);
    app.submit();
    settle_next(&mut app).await;
    let result = app.snapshot.result.clone();

    app.update_field(FormField::LinkedinPassword, "new-secret");

    assert_eq!(app.snapshot.phase, Phase::Idle);
    assert_eq!(app.snapshot.result, result);
    assert_eq!(app.snapshot.form.get(FormField::LinkedinPassword), "new-secret");
    assert_eq!(app.snapshot.form.get(FormField::LinkedinEmail), "li@example.com");
    assert_eq!(app.snapshot.form.get(FormField::UserEmail), "me@example.com");
}

#[tokio::test]
async fn test_new_submit_clears_previous_result() {
    let mock = MockHttpClient::new();
    mock.set_response(
        RUN_BOT_URL,
        MockResponse::json(r#"{"success": false, "error": "bad login"}"#),
    );
    let gate = mock.hold();
    let mut app = filled_app(&mock);

    app.submit();
    gate.release();
    settle_next(&mut app).await;
    assert!(app.snapshot.result.is_some());

    app.submit();
    assert!(app.snapshot.result.is_none());
    gate.release();
    settle_next(&mut app).await;
    assert_eq!(mock.get_requests().len(), 2);
}

#[tokio::test]
async fn test_stale_settle_is_ignored() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json(r#"{"success": true}"#));
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;
    let settled = app.snapshot.clone();

    // A late duplicate for the already-settled attempt
    app.handle_message(AppMessage::SubmitFailed {
        attempt: 1,
        code: "E_NET_TIMEOUT",
    });
    assert_eq!(app.snapshot, settled);
}

#[tokio::test]
async fn test_incomplete_form_issues_no_request() {
    let mock = MockHttpClient::new();
    let mut app = filled_app(&mock);
    app.update_field(FormField::UserEmail, "");

    assert!(!app.submit());
    assert_eq!(app.focus, Focus::Field(FormField::UserEmail));
    assert!(mock.get_requests().is_empty());

    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains("please fill in"));
}

#[tokio::test]
async fn test_filling_missing_field_clears_notice() {
    let mock = MockHttpClient::new();
    let mut app = filled_app(&mock);
    app.update_field(FormField::UserEmail, "");
    app.update_field(FormField::EmailPassword, "");
    assert!(!app.submit());

    app.update_field(FormField::UserEmail, "me@example.com");
    let notice = app.notice.clone().unwrap();
    assert!(!notice.contains("Your Email"));
    assert!(notice.contains("App Password"));

    app.update_field(FormField::EmailPassword, "app-secret");
    assert_eq!(app.notice, None);
    let screen = render_to_string(&app, 80, 32);
    assert!(!screen.contains("please fill in"));
}

#[tokio::test]
async fn test_array_reply_renders_empty_failure() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json("[]"));
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;

    assert_eq!(
        app.snapshot.result,
        Some(ResponseResult::Failure {
            error: String::new()
        })
    );
    let screen = render_to_string(&app, 80, 32);
    assert!(screen.contains("❌"));
    assert!(!screen.contains(FALLBACK_ERROR));
}

#[tokio::test]
async fn test_null_reply_renders_no_result() {
    let mock = MockHttpClient::new();
    mock.set_response(RUN_BOT_URL, MockResponse::json("null"));
    let mut app = filled_app(&mock);

    app.submit();
    settle_next(&mut app).await;

    assert!(!app.is_loading());
    assert_eq!(app.snapshot.result, None);
    let screen = render_to_string(&app, 80, 32);
    assert!(!screen.contains("❌"));
    assert!(!screen.contains("✅"));
}
