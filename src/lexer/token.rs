//! Token types shared by the value and table parsers

use crate::error::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// ASCII letter followed by ASCII alphanumerics or `_`
    Identifier,
    /// Run of ASCII digits, no sign
    Integer,
    /// Any other single character, whitespace included
    Punct(char),
    Eof,
}

impl TokenKind {
    /// Get token name for diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Punct(_) => "punctuation",
            Self::Eof => "EOF",
        }
    }
}

/// Token with its raw source text and location
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw source slice, empty for `Eof`
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub const fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: "",
            span,
        }
    }

    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// True for a single whitespace character (only produced under
    /// `Whitespace::Significant`)
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Punct(c) if c.is_whitespace())
    }

    /// Numeric value of an `Integer` token; `None` if it overflows `i64`
    pub fn integer(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Integer => self.text.parse().ok(),
            _ => None,
        }
    }
}
