//! Recursive-descent parser for the JSON-like value grammar
//!
//! The grammar is deliberately lenient: quotes, colons and commas are
//! structural noise that is skipped rather than validated, unterminated
//! containers close at end of input, and numbers are unsigned integers.
//! Only the root delimiter is checked.

use tracing::{debug, warn};

use crate::error::{Error, ErrorKind, Result, Span};
use crate::lexer::{Token, TokenKind, Tokenizer, Whitespace};
use crate::value::{Array, Object, Value};

/// Configuration for the value parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Whitespace policy of the underlying tokenizer
    pub whitespace: Whitespace,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            whitespace: Whitespace::Skip,
        }
    }
}

impl Config {
    /// No depth limit
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            whitespace: Whitespace::Skip,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: u16) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }
}

/// Value parser holding a one-token lookahead buffer
#[derive(Debug)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token<'a>,
    config: Config,
    depth: u16,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: &'a str, config: Config) -> Self {
        let mut tokenizer = Tokenizer::new(input, config.whitespace);
        let current = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            config,
            depth: 0,
        }
    }

    /// Parse a document whose root is an object
    pub fn parse(&mut self) -> Result<Value> {
        self.skip_whitespace_tokens();
        if !self.current.is_punct('{') {
            warn!(found = self.current.text, "document does not start with '{{'");
            return Err(self.error(ErrorKind::MissingRootObject));
        }
        let value = self.parse_object()?;
        debug!("parsed root object");
        Ok(value)
    }

    /// Parse a document whose root is an array
    pub fn parse_array(&mut self) -> Result<Value> {
        self.skip_whitespace_tokens();
        if !self.current.is_punct('[') {
            warn!(found = self.current.text, "document does not start with '['");
            return Err(self.error(ErrorKind::MissingRootArray));
        }
        let value = self.parse_array_body()?;
        debug!("parsed root array");
        Ok(value)
    }

    /// Span of the token the parser is stopped on
    pub const fn current_span(&self) -> Span {
        self.current.span
    }

    fn advance(&mut self) {
        self.current = self.tokenizer.next_token();
    }

    fn skip_whitespace_tokens(&mut self) {
        while self.current.is_whitespace() {
            self.advance();
        }
    }

    /// Quotes, colons, commas and blank tokens carry no data
    fn is_separator(token: &Token<'_>) -> bool {
        matches!(token.kind, TokenKind::Punct('"' | ':' | ',')) || token.is_whitespace()
    }

    fn at_close(&self, close: char) -> bool {
        self.current.is_eof() || self.current.is_punct(close)
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.current.span)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth = self.depth.saturating_add(1);
        if self.config.max_depth > 0 && self.depth > self.config.max_depth {
            return Err(self.error(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            }));
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Expects the current token to be `{`. Leaves the parser on the closing
    /// `}` or on `Eof`.
    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        let mut object = Object::new();
        let mut key: Option<&'a str> = None;
        self.advance();

        while !self.at_close('}') {
            if !Self::is_separator(&self.current) {
                match key.take() {
                    None => key = Some(self.current.text),
                    Some(k) => {
                        let value = self.parse_value()?;
                        object.insert(k, value);
                    }
                }
            }
            self.advance();
        }

        self.exit();
        Ok(Value::Object(object))
    }

    /// Expects the current token to be `[`. Leaves the parser on the closing
    /// `]` or on `Eof`.
    fn parse_array_body(&mut self) -> Result<Value> {
        self.enter()?;
        let mut array = Array::new();
        self.advance();

        while !self.at_close(']') {
            if !Self::is_separator(&self.current) {
                array.push(self.parse_value()?);
            }
            self.advance();
        }

        self.exit();
        Ok(Value::Array(array))
    }

    fn parse_value(&mut self) -> Result<Value> {
        while self.current.is_whitespace() {
            self.advance();
        }

        let token = self.current;
        let value = match token.kind {
            TokenKind::Punct('{') => return self.parse_object(),
            TokenKind::Punct('[') => return self.parse_array_body(),
            TokenKind::Eof => Value::Null,
            TokenKind::Integer => match token.integer() {
                Some(n) => Value::Integer(n),
                None => Value::String(token.text.to_string()),
            },
            _ => Self::literal(token.text),
        };
        Ok(value)
    }

    fn literal(text: &str) -> Value {
        if text.eq_ignore_ascii_case("true") {
            Value::Bool(true)
        } else if text.eq_ignore_ascii_case("false") {
            Value::Bool(false)
        } else if text.eq_ignore_ascii_case("null") {
            Value::Null
        } else {
            Value::String(text.to_string())
        }
    }
}
