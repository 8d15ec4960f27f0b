//! Row/field parser for quoted, delimiter-separated text
//!
//! Runs the shared tokenizer with significant whitespace, so spaces stay in
//! field content and `\n` ends a row. Never fails.

use tracing::{debug, trace};

use crate::lexer::{Token, TokenKind, Tokenizer, Whitespace};

/// One parsed row of fields
pub type Row = Vec<String>;

/// Configuration for the table parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Field separator. Alphanumerics, `"` and `\n` never act as separators.
    pub delimiter: char,
    /// Emit a non-empty row left open at end of input
    pub flush_trailing_row: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: ',',
            flush_trailing_row: true,
        }
    }
}

impl Config {
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub const fn with_flush_trailing_row(mut self, flush: bool) -> Self {
        self.flush_trailing_row = flush;
        self
    }
}

/// Table parser. The current token is the one-token lookahead buffer;
/// `peek_char` on the tokenizer supplies the second character needed to
/// recognize a doubled quote.
#[derive(Debug)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token<'a>,
    config: Config,
    rows: Vec<Row>,
    row: Row,
    /// `None` until something (even an empty quoted section or a delimiter)
    /// opens a field in the current row
    field: Option<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: &'a str, config: Config) -> Self {
        let mut tokenizer = Tokenizer::new(input, Whitespace::Significant);
        let current = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            config,
            rows: Vec::new(),
            row: Row::new(),
            field: None,
        }
    }

    /// Consume the input and return every row
    pub fn parse(mut self) -> Vec<Row> {
        while !self.current.is_eof() {
            match self.current.kind {
                TokenKind::Punct('"') => self.parse_quoted_field(),
                TokenKind::Punct('\n') => self.end_row(),
                TokenKind::Punct('\r') if self.tokenizer.peek_char() == Some('\n') => {}
                TokenKind::Punct(c) if c == self.config.delimiter => self.end_field(),
                _ => {
                    let text = self.current.text;
                    self.field_mut().push_str(text);
                }
            }
            self.advance();
        }

        if self.config.flush_trailing_row && (self.field.is_some() || !self.row.is_empty()) {
            trace!("flushing unterminated trailing row");
            self.end_row();
        }

        debug!(rows = self.rows.len(), "parsed table");
        self.rows
    }

    fn advance(&mut self) {
        self.current = self.tokenizer.next_token();
    }

    fn field_mut(&mut self) -> &mut String {
        self.field.get_or_insert_with(String::new)
    }

    fn end_field(&mut self) {
        let field = self.field.take().unwrap_or_default();
        self.row.push(field);
        self.field = Some(String::new());
    }

    fn end_row(&mut self) {
        if let Some(field) = self.field.take() {
            self.row.push(field);
        }
        self.rows.push(std::mem::take(&mut self.row));
    }

    /// Called on an opening `"`. Leaves the parser on the closing quote, or
    /// on `Eof` for an unterminated field.
    fn parse_quoted_field(&mut self) {
        self.field.get_or_insert_with(String::new);
        self.advance();

        while !self.current.is_eof() {
            if self.current.is_punct('"') {
                if self.tokenizer.peek_char() != Some('"') {
                    break;
                }
                self.advance();
                self.field_mut().push('"');
            } else {
                let text = self.current.text;
                self.field_mut().push_str(text);
            }
            self.advance();
        }
    }
}
