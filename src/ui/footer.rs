//! Footer: backend URL, reachability and key hints.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};
use crate::app::{App, BackendStatus, Focus};

/// Context-aware key hints.
pub fn footer_hint(app: &App) -> &'static str {
    if app.is_loading() {
        "running… · esc quit"
    } else if app.focus == Focus::Submit {
        "enter run · shift+tab back · esc quit"
    } else {
        "tab next · ctrl+s run · esc quit"
    }
}

/// Status indicator and label for the backend.
pub fn status_span(app: &App) -> Span<'static> {
    match app.backend_status {
        BackendStatus::Unknown => Span::styled("○ unknown", Style::default().fg(COLOR_DIM)),
        BackendStatus::Checking => Span::styled(
            format!("{} checking", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ),
        BackendStatus::Reachable {
            response_time_ms: Some(ms),
        } => Span::styled(
            format!("● online ({}ms)", ms),
            Style::default().fg(COLOR_SUCCESS),
        ),
        BackendStatus::Reachable {
            response_time_ms: None,
        } => Span::styled("● online", Style::default().fg(COLOR_SUCCESS)),
        BackendStatus::Unreachable { .. } => {
            Span::styled("○ offline", Style::default().fg(COLOR_ERROR))
        }
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hint = footer_hint(app);
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(hint.chars().count() as u16 + 1),
    ])
    .areas(area);

    let status = Line::from(vec![
        Span::raw(" "),
        Span::styled(app.backend().base_url().to_string(), Style::default().fg(COLOR_DIM)),
        Span::raw(" "),
        status_span(app),
    ]);
    frame.render_widget(Paragraph::new(status), left);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM)))),
        right,
    );
}
