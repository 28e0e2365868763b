//! Fixed key tables for the form.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::command::Command;

/// A key code with the exact modifier set it must be pressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Bindings that apply whatever has focus.
const GLOBAL: &[(KeyCombo, Command)] = &[
    (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
    (KeyCombo::plain(KeyCode::Esc), Command::Quit),
    (KeyCombo::ctrl(KeyCode::Char('s')), Command::Submit),
    (KeyCombo::plain(KeyCode::Tab), Command::FocusNext),
    (KeyCombo::plain(KeyCode::Down), Command::FocusNext),
    // Shift+Tab arrives as BackTab, with SHIFT set on some terminals only
    (KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev),
    (KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev),
    (KeyCombo::plain(KeyCode::Up), Command::FocusPrev),
];

/// Bindings that apply only while a text field is focused.
const EDITING: &[(KeyCombo, Command)] = &[
    (KeyCombo::plain(KeyCode::Backspace), Command::Backspace),
    (KeyCombo::plain(KeyCode::Delete), Command::DeleteChar),
    (KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft),
    (KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight),
    (KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome),
    (KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd),
    (KeyCombo::ctrl(KeyCode::Char('a')), Command::MoveCursorHome),
    (KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd),
];

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
    pub editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self {
            global: GLOBAL.iter().copied().collect(),
            editing: EDITING.iter().copied().collect(),
        }
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_editing(&self, combo: &KeyCombo) -> Option<Command> {
        self.editing.get(combo).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_global_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(Command::Quit)
        );
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('s'))),
            Some(Command::Submit)
        );
        assert_eq!(
            config.get_global(&KeyCombo::shift(KeyCode::BackTab)),
            Some(Command::FocusPrev)
        );
    }

    #[test]
    fn test_plain_char_is_not_bound() {
        let config = KeybindingConfig::new();
        assert_eq!(config.get_global(&KeyCombo::plain(KeyCode::Char('s'))), None);
        assert_eq!(config.get_editing(&KeyCombo::plain(KeyCode::Char('s'))), None);
    }
}
