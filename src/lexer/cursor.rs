//! Character cursor for input navigation

use crate::error::Pos;

/// Cursor over a `&str` with line and column tracking.
///
/// The offset only ever moves forward and always rests on a char boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current character without consuming
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peek at the character `ahead` positions past the current one
    pub fn peek(&self, ahead: usize) -> Option<char> {
        self.remaining().chars().nth(ahead)
    }

    /// Advance cursor by one character
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Advance while `pred` holds for the current character
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current().is_some_and(&pred) {
            self.advance();
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get slice from `start` to current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}
