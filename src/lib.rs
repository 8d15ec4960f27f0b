//! lexparse: a lenient tokenizer with a JSON-like value parser and a CSV
//! table parser built on top of it
//!
//! This crate provides functionality to:
//! - Tokenize text with skipped or significant whitespace
//! - Parse JSON-like documents into a [`Value`] tree
//! - Parse quoted, comma-separated text into rows of fields
//! - Render values and rows back to text
//!
//! # Examples
//! ```
//! use lexparse::{parse_table, parse_value, Result};
//!
//! fn example() -> Result<()> {
//!     let value = parse_value(r#"{"name": "Alice", "age": 30}"#)?;
//!     assert_eq!(value["age"].as_integer(), Some(30));
//!
//!     let rows = parse_table("a,\"b,c\"\n");
//!     assert_eq!(rows, vec![vec!["a".to_string(), "b,c".to_string()]]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, instrument};

pub mod csv;
pub mod error;
pub mod formatter;
pub mod json;
pub mod lexer;
pub mod value;

// Re-exports
pub use csv::Row;
pub use error::{Error, ErrorKind, Pos, Result, Span};
pub use formatter::{format_csv, format_rows, format_value, FormatConfig};
pub use lexer::{tokenize, Token, TokenKind, Tokenizer, Whitespace};
pub use value::{Array, Object, Value};

/// Parse a document whose root must be an object
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse_value(input: &str) -> Result<Value> {
    parse_value_with_config(input, json::Config::default())
}

/// Parse a root-object document with custom configuration
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse_value_with_config(input: &str, config: json::Config) -> Result<Value> {
    json::Parser::with_config(input, config).parse()
}

/// Parse a document whose root must be an array
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse_array(input: &str) -> Result<Value> {
    json::Parser::new(input).parse_array()
}

/// Parse delimited text into rows. Never fails.
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse_table(input: &str) -> Vec<Row> {
    parse_table_with_config(input, csv::Config::default())
}

/// Parse delimited text with custom configuration
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse_table_with_config(input: &str, config: csv::Config) -> Vec<Row> {
    let rows = csv::Parser::with_config(input, config).parse();
    debug!(rows = rows.len(), "table parsing completed");
    rows
}
