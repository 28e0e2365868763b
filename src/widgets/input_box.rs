use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const MASK_CHAR: char = '•';

/// Editable text with a cursor.
///
/// Positions are character indices, never byte offsets, so multi-byte input
/// edits cleanly. Newlines are only accepted when `multiline` is set.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Character index, `0..=len()`.
    cursor_position: usize,
    multiline: bool,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty box that accepts newlines.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Newlines only when multiline; no other control characters.
    fn accepts(&self, c: char) -> bool {
        if c == '\n' {
            self.multiline
        } else {
            !c.is_control()
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position.
    ///
    /// Returns `false` if the character was refused (newline in a
    /// single-line box, or a control character).
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
        true
    }

    /// Insert pasted text. Returns `true` if anything was inserted.
    ///
    /// Single-line boxes turn line breaks into nothing; `\r\n` becomes `\n`.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let mut inserted = false;
        for c in text.replace("\r\n", "\n").chars() {
            inserted |= self.insert_char(c);
        }
        inserted
    }

    fn remove_at(&mut self, char_index: usize) {
        let at = self.byte_index(char_index);
        self.content.remove(at);
    }

    /// Delete key: remove the character under the cursor.
    pub fn delete_char(&mut self) -> bool {
        let at_end = self.cursor_position >= self.len();
        if !at_end {
            self.remove_at(self.cursor_position);
        }
        !at_end
    }

    /// Backspace: remove the character left of the cursor.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.cursor_position.checked_sub(1) else {
            return false;
        };
        self.remove_at(prev);
        self.cursor_position = prev;
        true
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the text; cursor goes to the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into().replace("\r\n", "\n");
        self.content = content.chars().filter(|c| self.accepts(*c)).collect();
        self.cursor_position = self.len();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Line and column (both character based) of the cursor.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.content.chars().take(self.cursor_position).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|s| s.chars().count())
            .unwrap_or(0);
        (line, col)
    }

    /// Text as it should appear on screen.
    pub fn display_text(&self, masked: bool) -> String {
        if masked {
            self.content
                .chars()
                .map(|c| if c == '\n' { c } else { MASK_CHAR })
                .collect()
        } else {
            self.content.clone()
        }
    }
}

/// Bordered, titled rendering of an [`InputBox`].
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    masked: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str) -> Self {
        Self {
            input_box,
            title,
            focused: false,
            masked: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Terminal cell where the cursor belongs when this box is drawn into
    /// `area`, or `None` if it falls outside the box.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = inner_area(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let (line, col) = self.input_box.cursor_line_col();
        let (row_offset, col_offset) = scroll_offsets(line, col, inner);
        let display = self.input_box.display_text(self.masked);
        let line_text = display.split('\n').nth(line).unwrap_or("");
        let prefix: String = line_text.chars().skip(col_offset).take(col - col_offset).collect();

        let x = inner.x + prefix.width() as u16;
        let y = inner.y + (line - row_offset) as u16;
        (x < inner.right() && y < inner.bottom()).then_some(Position::new(x, y))
    }
}

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// First visible row and column so that the cursor stays in view.
fn scroll_offsets(line: usize, col: usize, inner: Rect) -> (usize, usize) {
    let height = inner.height as usize;
    let width = inner.width as usize;
    let row_offset = if line >= height { line + 1 - height } else { 0 };
    // Leave one cell for the cursor block past the last character
    let col_offset = if col >= width { col + 1 - width } else { 0 };
    (row_offset, col_offset)
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let title_style = if self.focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(ratatui::text::Span::styled(self.title, title_style));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (line, col) = self.input_box.cursor_line_col();
        let (row_offset, col_offset) = if self.focused {
            scroll_offsets(line, col, inner)
        } else {
            (0, 0)
        };

        let display = self.input_box.display_text(self.masked);
        let text_style = Style::default().fg(Color::White);
        for (row, text) in display
            .split('\n')
            .skip(row_offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let visible: String = text.chars().skip(col_offset).collect();
            buf.set_stringn(
                inner.x,
                inner.y + row as u16,
                visible,
                inner.width as usize,
                text_style,
            );
        }
    }
}
