//! Read-only scan position over a script.

/// A byte position into an immutable script, advanced one character at a time.
///
/// Lookahead is done by saving [`Cursor::position`] and restoring it with
/// [`Cursor::reset`], never by reading ahead destructively.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The full script text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of the input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to a previously saved position.
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Returns true once every character has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns true if the next two characters open a block or line comment.
    #[must_use]
    pub fn at_comment_start(&self) -> bool {
        matches!(
            (self.peek(), self.peek_next()),
            (Some('/'), Some('*')) | (Some('-'), Some('-'))
        )
    }
}
