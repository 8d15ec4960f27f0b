//! Table parser for CSV-style text

pub mod parser;

pub use parser::{Config, Parser, Row};
