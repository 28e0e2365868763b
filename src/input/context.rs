//! Input context for determining which commands are available.

use crate::app::{App, Focus};
use crate::models::FieldKind;

/// The slice of application state that key dispatch depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub focus: Focus,
    /// Focused field accepts newlines
    pub multiline: bool,
}

impl InputContext {
    pub fn new(focus: Focus) -> Self {
        let multiline = match focus {
            Focus::Field(field) => field.kind() == FieldKind::Multiline,
            Focus::Submit => false,
        };
        Self { focus, multiline }
    }

    pub fn from_app(app: &App) -> Self {
        Self::new(app.focus)
    }

    pub fn is_field_focused(&self) -> bool {
        matches!(self.focus, Focus::Field(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormField;

    #[test]
    fn test_keywords_field_is_multiline() {
        let ctx = InputContext::new(Focus::Field(FormField::Keywords));
        assert!(ctx.multiline);
        assert!(ctx.is_field_focused());
    }

    #[test]
    fn test_submit_focus() {
        let ctx = InputContext::new(Focus::Submit);
        assert!(!ctx.multiline);
        assert!(!ctx.is_field_focused());
    }
}
