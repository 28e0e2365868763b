//! Validation notice and the outcome of the last submission.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ERROR, COLOR_SUCCESS, COLOR_WARNING};
use crate::app::App;

/// Lines shown under the submit control: the notice (if any), then the
/// result of the last settled attempt (if any).
pub fn result_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(ref notice) = app.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(COLOR_WARNING),
        )));
    }

    if let Some(ref result) = app.snapshot.result {
        let color = if result.is_success() {
            COLOR_SUCCESS
        } else {
            COLOR_ERROR
        };
        lines.push(Line::from(Span::styled(
            result.display_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

pub fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let lines = result_lines(app);
    if lines.is_empty() {
        return;
    }
    let paragraph = Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
