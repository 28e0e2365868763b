//! What a key press means, independent of which key it was.

/// An action on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Run the bot from any focus.
    Submit,
    FocusNext,
    FocusPrev,

    InsertChar(char),
    /// Only reaches multiline fields; single-line editors drop it.
    InsertNewline,
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,

    /// Recognised and swallowed.
    Noop,
}
