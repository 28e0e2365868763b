//! Common test utilities for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use jobbot::adapters::MockHttpClient;
use jobbot::prelude::*;
use ratatui::{backend::TestBackend, Terminal};

pub const BASE_URL: &str = "http://localhost:5000";
pub const RUN_BOT_URL: &str = "http://localhost:5000/run-bot";

/// A form with every field filled in.
pub fn complete_form() -> FormState {
    FormState::new()
        .with_field(FormField::LinkedinEmail, "li@example.com")
        .with_field(FormField::LinkedinPassword, "li-secret")
        .with_field(FormField::UserEmail, "me@example.com")
        .with_field(FormField::EmailPassword, "app-secret")
}

pub fn backend(mock: &MockHttpClient) -> BotBackend {
    BotBackend::new(BASE_URL, Arc::new(mock.clone()))
}

/// App over `mock`, filled in through the same path as typing.
pub fn filled_app(mock: &MockHttpClient) -> App {
    let form = complete_form();
    let mut app = App::new(backend(mock), FormState::new());
    for field in FormField::ALL {
        app.update_field(field, form.get(field));
    }
    app
}

/// Render `app` and return the buffer as one string.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Yield until the mock has recorded `count` requests.
pub async fn wait_for_requests(mock: &MockHttpClient, count: usize) {
    for _ in 0..200 {
        if mock.get_requests().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!(
        "expected {} requests, saw {}",
        count,
        mock.get_requests().len()
    );
}

/// Receive one background message and feed it to the app.
pub async fn settle_next(app: &mut App) {
    let message = tokio::time::timeout(Duration::from_secs(2), app.next_message())
        .await
        .expect("timed out waiting for app message")
        .expect("message channel closed");
    app.handle_message(message);
}
