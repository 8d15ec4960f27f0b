//! Rendering of parsed values and rows back to text

mod csv;
mod json;

pub use self::{csv::CsvFormatter, json::JsonFormatter};
use crate::csv::Row;
use crate::value::{Array, Value};

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_spaces: usize,
    /// Emit object keys sorted instead of in insertion order
    pub sort_keys: bool,
    /// Multi-line output; compact single-line output otherwise
    pub pretty: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            sort_keys: false,
            pretty: false,
        }
    }
}

impl FormatConfig {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}

/// Render a value as JSON text
pub fn format_value(value: &Value, config: &FormatConfig) -> String {
    JsonFormatter.format(value, config)
}

/// Render rows as a JSON array of string arrays
pub fn format_rows(rows: &[Row], config: &FormatConfig) -> String {
    JsonFormatter.format(&rows_to_value(rows), config)
}

/// Render rows back to delimiter-separated text
pub fn format_csv(rows: &[Row], delimiter: char) -> String {
    CsvFormatter::new(delimiter).format(rows)
}

/// Convert rows into an array of arrays of strings
pub fn rows_to_value(rows: &[Row]) -> Value {
    rows.iter()
        .map(|row| row.iter().map(|f| Value::from(f.as_str())).collect::<Array>())
        .map(Value::Array)
        .collect::<Array>()
        .into()
}
