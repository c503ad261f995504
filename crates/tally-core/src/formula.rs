//! Formula model: an ordered token sequence with an insertion cursor

use crate::token::Token;

/// An ordered token sequence under cursor-addressed editing
///
/// Insertion order is the left-to-right reading order of the expression.
/// The model enforces no adjacency constraints: malformed expressions may
/// exist in the model and simply fail evaluation.
///
/// The cursor denotes the insertion point before the token at that index,
/// or the end of the sequence when equal to the length. It is always within
/// `[0, len]`; out-of-range requests clamp rather than fail, so none of the
/// editing operations return errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formula {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Formula {
    /// Create an empty formula with the cursor at position 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token at the cursor and advance the cursor past it
    ///
    /// Subsequent tokens shift right. Literal and reference tokens are
    /// accepted uniformly; no content checks happen here.
    pub fn insert(&mut self, token: Token) {
        self.tokens.insert(self.cursor, token);
        self.cursor += 1;
    }

    /// Remove the token immediately before the cursor and move the cursor
    /// back by one
    ///
    /// Backspace deletes one token, not one character: an operator, a whole
    /// digit run, or a whole reference is one deletion unit. A no-op when
    /// the cursor is at position 0. Returns the removed token.
    pub fn delete_before_cursor(&mut self) -> Option<Token> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.tokens.remove(self.cursor))
    }

    /// Move the cursor to `to`, clamped to `[0, len]`
    pub fn move_cursor(&mut self, to: usize) {
        self.cursor = to.min(self.tokens.len());
    }

    /// Move the cursor one token to the left, stopping at 0
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one token to the right, stopping at the end
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.tokens.len());
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of tokens in the sequence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token sequence in reading order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
