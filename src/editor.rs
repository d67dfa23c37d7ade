//! Single-line text editing with a caret, backed by `tui-textarea`.
//!
//! Input fields keep plain `(text, caret)` pairs. Each edit hydrates a
//! temporary `TextArea`, applies one operation and reads the result back,
//! so the form stays a cheap, comparable value.

use tui_textarea::{CursorMove, TextArea};

/// Caret movement inside one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caret {
    Left,
    Right,
    Home,
    End,
}

/// One editing operation on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Insert before the caret. Control characters are ignored.
    Insert(char),
    /// Delete the character before the caret.
    Backspace,
    /// Delete the character under the caret.
    Delete,
    Move(Caret),
}

/// Text of one field plus a caret measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    caret: usize,
}

impl TextInput {
    /// Field holding `text` with the caret at its end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        TextInput { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position, in characters from the start.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Text before the caret.
    pub fn before_caret(&self) -> &str {
        match self.text.char_indices().nth(self.caret) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    pub fn apply(&mut self, edit: Edit) {
        if matches!(edit, Edit::Insert(c) if c.is_control()) {
            return;
        }

        let mut textarea = TextArea::default();
        if !self.text.is_empty() {
            textarea.insert_str(&self.text);
        }
        textarea.move_cursor(CursorMove::Jump(
            0,
            u16::try_from(self.caret).unwrap_or(u16::MAX),
        ));

        match edit {
            Edit::Insert(c) => {
                textarea.insert_char(c);
            }
            Edit::Backspace => {
                textarea.delete_char();
            }
            Edit::Delete => {
                textarea.delete_next_char();
            }
            Edit::Move(Caret::Left) => textarea.move_cursor(CursorMove::Back),
            Edit::Move(Caret::Right) => textarea.move_cursor(CursorMove::Forward),
            Edit::Move(Caret::Home) => textarea.move_cursor(CursorMove::Head),
            Edit::Move(Caret::End) => textarea.move_cursor(CursorMove::End),
        }

        self.text = textarea.lines().concat();
        self.caret = textarea.cursor().1;
    }
}

// ============================================================================
// TESTS
// ============================================================================
