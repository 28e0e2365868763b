//! UI rendering for the job bot form
//!
//! One screen: a centered card holding the form, the submit control and the
//! result line, with a one-line footer at the bottom of the terminal.

mod footer;
mod form;
mod helpers;
mod result;
mod theme;

pub use form::{card_height, CARD_TITLE, CARD_WIDTH, SUBMIT_LABEL, SUBMIT_LOADING_LABEL};
pub use helpers::SPINNER_FRAMES;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use footer::render_footer;
use form::render_form_card;
use helpers::{centered_rect, inner_rect};

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let card = centered_rect(inner_rect(body, 1), CARD_WIDTH, card_height());
    render_form_card(frame, card, app);
    render_footer(frame, footer, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::backend::BotBackend;
    use crate::models::FormState;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
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

    fn app() -> App {
        let backend = BotBackend::new("http://localhost:5000", Arc::new(MockHttpClient::new()));
        App::new(backend, FormState::new())
    }

    #[test]
    fn test_renders_card_and_fields() {
        let out = render_to_string(&app(), 80, 32);
        assert!(out.contains(CARD_TITLE));
        assert!(out.contains("LinkedIn Email"));
        assert!(out.contains("Keywords"));
        assert!(out.contains(SUBMIT_LABEL));
        assert!(out.contains("http://localhost:5000"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let out = render_to_string(&app(), 10, 3);
        assert!(!out.is_empty());
    }
}
