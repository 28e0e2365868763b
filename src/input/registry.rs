//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Focus;

/// Maps key events to commands.
///
/// Priority order:
/// 1. Global bindings (quit, submit, focus movement)
/// 2. Enter, resolved by what has focus
/// 3. Editing bindings when a field has focus
/// 4. Printable characters
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when the key means nothing in this context.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd);
        }

        if key.code == KeyCode::Enter {
            return Some(self.resolve_enter(key.modifiers, context));
        }

        if !context.is_field_focused() {
            // Space presses the focused button
            return (key.code == KeyCode::Char(' ')).then_some(Command::Submit);
        }

        if let Some(cmd) = self.config.get_editing(&combo) {
            return Some(cmd);
        }
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }

    fn resolve_enter(&self, modifiers: KeyModifiers, context: &InputContext) -> Command {
        match context.focus {
            Focus::Submit => Command::Submit,
            Focus::Field(_) if context.multiline => {
                // Modified Enter leaves the keywords box
                if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    Command::FocusNext
                } else {
                    Command::InsertNewline
                }
            }
            Focus::Field(_) => Command::FocusNext,
        }
    }
}
