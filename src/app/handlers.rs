//! Key, paste and message handling for the App.

use crossterm::event::KeyEvent;

use super::{App, AppMessage, Focus};
use crate::input::{Command, InputContext};
use crate::state::FormEvent;
use crate::widgets::InputBox;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, message: AppMessage) {
        let event = match message {
            AppMessage::SubmitCompleted { attempt, reply } => {
                FormEvent::SubmitSucceeded { attempt, reply }
            }
            AppMessage::SubmitFailed { attempt, code } => {
                tracing::debug!(attempt, code, "Showing fallback error");
                FormEvent::SubmitFailed { attempt }
            }
            AppMessage::HealthChecked(result) => {
                self.backend_status = result.into();
                self.mark_dirty();
                return;
            }
        };

        if let Err(rejection) = self.apply(event) {
            tracing::debug!(%rejection, "Dropped settle event");
        }
    }

    /// Translate a key press into a command and run it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = InputContext::from_app(self);
        if let Some(cmd) = self.keys.dispatch(key, &context) {
            self.execute_command(cmd);
        }
    }

    pub fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit(),
            Command::Submit => {
                self.submit();
            }
            Command::FocusNext => self.set_focus(self.focus.next()),
            Command::FocusPrev => self.set_focus(self.focus.prev()),
            Command::InsertChar(c) => self.edit_focused(|input| input.insert_char(c)),
            Command::InsertNewline => self.edit_focused(|input| input.insert_char('\n')),
            Command::Backspace => self.edit_focused(InputBox::backspace),
            Command::DeleteChar => self.edit_focused(InputBox::delete_char),
            Command::MoveCursorLeft => self.move_cursor(InputBox::move_cursor_left),
            Command::MoveCursorRight => self.move_cursor(InputBox::move_cursor_right),
            Command::MoveCursorHome => self.move_cursor(InputBox::move_cursor_home),
            Command::MoveCursorEnd => self.move_cursor(InputBox::move_cursor_end),
            Command::Noop => {}
        }
    }

    /// Insert bracketed-paste text into the focused field.
    pub fn handle_paste(&mut self, text: &str) {
        self.edit_focused(|input| input.insert_str(text));
    }

    /// Apply an edit to the focused editor; a text change becomes exactly
    /// one `FieldChanged`.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut InputBox) -> bool) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        if edit(&mut self.editors[field.index()]) {
            self.sync_field(field);
        }
    }

    fn move_cursor(&mut self, movement: impl FnOnce(&mut InputBox)) {
        if let Focus::Field(field) = self.focus {
            movement(&mut self.editors[field.index()]);
            self.mark_dirty();
        }
    }
}
