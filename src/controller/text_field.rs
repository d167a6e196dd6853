//! Single-line text input with a cursor
//!
//! The cursor is a char index (not a byte offset) so multi-byte input edits
//! cleanly. Display column is computed with unicode-width for the terminal cursor.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    /// Char index in `0..=char_count`
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Terminal column of the cursor relative to the start of the buffer
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.byte_offset(self.cursor)].width()
    }

    pub fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
    }

    /// Delete the char under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Take the buffer contents, leaving the field empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextField {
        let mut field = TextField::new();
        s.chars().for_each(|c| field.insert(c));
        field
    }

    #[test]
    fn test_insert_appends_at_cursor() {
        let mut field = typed("milk");
        field.move_home();
        "Buy ".chars().for_each(|c| field.insert(c));
        assert_eq!(field.value(), "Buy milk");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = typed("abcd");
        field.backspace();
        assert_eq!(field.value(), "abc");

        field.move_home();
        field.backspace(); // nothing before cursor
        field.delete_forward();
        assert_eq!(field.value(), "bc");

        field.move_end();
        field.delete_forward(); // nothing under cursor
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = typed("héllo");
        field.move_left();
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "hllo");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let mut field = typed("日本");
        assert_eq!(field.cursor_column(), 4);
        field.move_left();
        assert_eq!(field.cursor_column(), 2);
    }

    #[test]
    fn test_control_chars_ignored() {
        let field = typed("a\tb\n");
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = typed("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.move_home();
        field.move_left();
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_take_empties_field() {
        let mut field = typed("x");
        assert_eq!(field.take(), "x");
        assert!(field.is_blank());
        assert_eq!(field.cursor(), 0);
    }
}
