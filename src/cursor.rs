use crate::token::Span;

/// Position-tracking reader over a source text.
///
/// `line` and `column` always describe the next unread character.
/// Offsets count characters, not bytes.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    /// Byte index of the next unread character.
    pos: usize,
    offset: usize,
    line: usize,
    col: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
            offset: 0,
            line: 1,
            col: 1,
        }
    }

    /// Character at the current position, `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Character one past the current position.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    /// Consume one character. No-op at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    pub fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    #[must_use]
    pub const fn position(&self) -> Span {
        Span {
            offset: self.offset,
            line: self.line,
            column: self.col,
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte index of the next unread character, for slicing lexemes.
    pub(crate) const fn byte_pos(&self) -> usize {
        self.pos
    }

    /// Source text between a previously captured byte index and the
    /// current position.
    pub(crate) fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.pos]
    }
}
