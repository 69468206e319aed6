//! Cursor over an immutable input text.
//!
//! Tracks the byte offset plus 1-based line/column numbers and advances one
//! character at a time. The cursor never calls back into the grammar checker.

mod position;

pub use position::Position;

use crate::error::{ParseError, ParseResult};
use tracing::trace;

/// A cursor for traversing Brack source text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: Position::start(),
        }
    }

    /// The full input text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn index(&self) -> usize {
        self.position.index
    }

    /// Returns the character at the current index, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `offset` characters ahead without advancing.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn at_end(&self) -> bool {
        self.position.index >= self.text.len()
    }

    /// Consumes one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.position.advance(ch);
        Some(ch)
    }

    /// Consumes up to `count` characters, stopping early at end of input.
    ///
    /// Returns how many characters were actually consumed.
    pub fn advance(&mut self, count: usize) -> usize {
        let mut consumed = 0;
        while consumed < count && self.bump().is_some() {
            consumed += 1;
        }
        consumed
    }

    /// Consumes characters while the predicate returns true.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> &'a str
    where
        F: FnMut(char) -> bool,
    {
        let start = self.position.index;
        while let Some(ch) = self.current() {
            if !predicate(ch) {
                break;
            }
            self.position.advance(ch);
        }
        &self.text[start..self.position.index]
    }

    /// Returns the unconsumed tail of the input.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.position.index..]
    }

    /// Consumes `expected` or fails at the current position without consuming.
    pub fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.current() {
            Some(ch) if ch == expected => {
                self.position.advance(ch);
                Ok(())
            }
            found => {
                trace!(
                    target: "brack::cursor",
                    ?expected,
                    ?found,
                    line = self.position.line,
                    column = self.position.column,
                    "expect failed"
                );
                Err(ParseError::expected(expected, found, self.position))
            }
        }
    }
}
