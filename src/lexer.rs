//! Lexer module for tokenization

pub mod cursor;
pub mod token;
pub mod tokenizer;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer, Whitespace};
