//! Minimal multi-line text editing over a `String`.
//!
//! The cursor is a char index, so multi-byte text (accents are everywhere in
//! briefs) never splits a character.

/// Cursor state for one editable buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    pos: usize,
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

impl TextCursor {
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Put the cursor after the last character
    pub fn jump_to_end(&mut self, text: &str) {
        self.pos = text.chars().count();
    }

    fn clamp(&mut self, text: &str) {
        self.pos = self.pos.min(text.chars().count());
    }

    pub fn insert(&mut self, text: &mut String, c: char) {
        self.clamp(text);
        let at = byte_index(text, self.pos);
        text.insert(at, c);
        self.pos += 1;
    }

    pub fn backspace(&mut self, text: &mut String) {
        self.clamp(text);
        if self.pos == 0 {
            return;
        }
        let at = byte_index(text, self.pos - 1);
        text.remove(at);
        self.pos -= 1;
    }

    pub fn delete(&mut self, text: &mut String) {
        self.clamp(text);
        if self.pos < text.chars().count() {
            let at = byte_index(text, self.pos);
            text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn right(&mut self, text: &str) {
        self.pos = (self.pos + 1).min(text.chars().count());
    }

    /// (line, column) of the cursor, both in chars
    pub fn line_col(&self, text: &str) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in text.chars().take(self.pos) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    fn set_line_col(&mut self, text: &str, line: usize, col: usize) {
        let mut pos = 0;
        for (i, l) in text.split('\n').enumerate() {
            let len = l.chars().count();
            if i == line {
                self.pos = pos + col.min(len);
                return;
            }
            pos += len + 1;
        }
        self.jump_to_end(text);
    }

    pub fn home(&mut self, text: &str) {
        let (line, _) = self.line_col(text);
        self.set_line_col(text, line, 0);
    }

    pub fn end(&mut self, text: &str) {
        let (line, _) = self.line_col(text);
        self.set_line_col(text, line, usize::MAX);
    }

    pub fn up(&mut self, text: &str) {
        let (line, col) = self.line_col(text);
        if line > 0 {
            self.set_line_col(text, line - 1, col);
        }
    }

    pub fn down(&mut self, text: &str) {
        let (line, col) = self.line_col(text);
        if line + 1 < text.split('\n').count() {
            self.set_line_col(text, line + 1, col);
        }
    }
}
