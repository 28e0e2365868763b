//! The form card: five input fields and the submit control.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::spinner_frame;
use super::result::render_result;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, Focus};
use crate::models::{FieldKind, FormField};
use crate::widgets::InputBoxWidget;

pub const CARD_TITLE: &str = "LinkedIn Job Bot";
pub const SUBMIT_LABEL: &str = "Run Bot";
pub const SUBMIT_LOADING_LABEL: &str = "Running Bot...";

pub const CARD_WIDTH: u16 = 64;

const SINGLE_LINE_HEIGHT: u16 = 3;
const MULTILINE_HEIGHT: u16 = 5;
const RESULT_HEIGHT: u16 = 3;

/// Outer height of the card, borders included.
pub fn card_height() -> u16 {
    let fields: u16 = FormField::ALL.iter().map(|f| field_height(*f)).sum();
    // spacer + submit + spacer + result, plus the card border
    fields + 1 + 1 + 1 + RESULT_HEIGHT + 2
}

fn field_height(field: FormField) -> u16 {
    match field.kind() {
        FieldKind::Multiline => MULTILINE_HEIGHT,
        _ => SINGLE_LINE_HEIGHT,
    }
}

pub fn render_form_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", CARD_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|f| Constraint::Length(field_height(*f)))
        .collect();
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ]);
    let rows = Layout::vertical(constraints).split(inner);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        render_field(frame, *row, app, *field);
    }

    let fields = FormField::ALL.len();
    render_submit(frame, rows[fields + 1], app);
    render_result(frame, rows[fields + 3], app);
}

fn render_field(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let focused = app.focus == Focus::Field(field);
    let title = field.placeholder();
    let widget = InputBoxWidget::new(app.editor(field), title)
        .focused(focused)
        .masked(field.is_masked());

    let cursor = focused.then(|| widget.cursor_position(area)).flatten();
    frame.render_widget(widget, area);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

/// Text and style of the submit control.
///
/// Disabled while a submission is in flight.
pub fn submit_label(app: &App) -> (String, Style) {
    if app.is_loading() {
        (
            format!("[ {} {} ]", spinner_frame(app.tick_count), SUBMIT_LOADING_LABEL),
            Style::default().fg(COLOR_DIM),
        )
    } else if app.focus == Focus::Submit {
        (
            format!("[ {} ]", SUBMIT_LABEL),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        (
            format!("[ {} ]", SUBMIT_LABEL),
            Style::default().fg(COLOR_ACCENT),
        )
    }
}

fn render_submit(frame: &mut Frame, area: Rect, app: &App) {
    let (label, style) = submit_label(app);
    let line = Line::from(Span::styled(label, style)).centered();
    frame.render_widget(Paragraph::new(line), area);
}
