//! Error types for lexparse

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset, always on a char boundary
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Range of source text covered by a token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`
    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// Reason a parse was rejected
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("missing root object")]
    MissingRootObject,
    #[error("missing root array")]
    MissingRootArray,
    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: u16 },
}

/// Main error type for lexparse
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("error at {}: {}", .span.start, .kind)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
}

impl Error {
    pub const fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub const fn span(&self) -> Span {
        self.span
    }
}

/// Result type alias for lexparse
pub type Result<T> = std::result::Result<T, Error>;
