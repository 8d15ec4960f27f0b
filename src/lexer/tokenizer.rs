//! Pull-based tokenizer
//!
//! One implementation serves both grammars; the [`Whitespace`] policy decides
//! whether blanks and line breaks are dropped (value parser) or surfaced as
//! single-character tokens (table parser).

use super::cursor::Cursor;
use super::token::{Token, TokenKind};
use crate::error::Span;

/// How the tokenizer treats whitespace between tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Whitespace {
    /// Skip all whitespace before each token
    #[default]
    Skip,
    /// Emit each whitespace character as a `Punct` token
    Significant,
}

/// Tokenizer over a borrowed string. Never fails: anything unrecognized
/// comes out as a one-character `Punct` token.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    whitespace: Whitespace,
}

/// Start tokenizing `input` under the given whitespace policy
pub const fn tokenize(input: &str, whitespace: Whitespace) -> Tokenizer<'_> {
    Tokenizer::new(input, whitespace)
}

impl<'a> Tokenizer<'a> {
    pub const fn new(input: &'a str, whitespace: Whitespace) -> Self {
        Self {
            cursor: Cursor::new(input),
            whitespace,
        }
    }

    pub const fn whitespace(&self) -> Whitespace {
        self.whitespace
    }

    /// Byte offset of the cursor
    pub const fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Next character after the cursor, without consuming it
    pub fn peek_char(&self) -> Option<char> {
        self.cursor.current()
    }

    /// Scan the next token. Returns `Eof` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token<'a> {
        if self.whitespace == Whitespace::Skip {
            self.cursor.skip_whitespace();
        }

        let start = self.cursor.position();
        let Some(c) = self.cursor.current() else {
            return Token::eof(Span::at(start));
        };

        let kind = if c.is_ascii_alphabetic() {
            self.cursor
                .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
            TokenKind::Identifier
        } else if c.is_ascii_digit() {
            self.cursor.advance_while(|c| c.is_ascii_digit());
            TokenKind::Integer
        } else {
            self.cursor.advance();
            TokenKind::Punct(c)
        };

        let text = self.cursor.slice_from(start.offset);
        Token::new(kind, text, Span::new(start, self.cursor.position()))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, not including, `Eof`
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}
