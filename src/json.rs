//! Value parser for JSON-like documents

pub mod parser;

pub use parser::{Config, Parser};
