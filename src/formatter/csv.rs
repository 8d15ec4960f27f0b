use crate::csv::Row;

/// Renders rows as delimiter-separated text, one line per row
pub struct CsvFormatter {
    delimiter: char,
}

impl CsvFormatter {
    pub const fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn format(&self, rows: &[Row]) -> String {
        let delimiter = self.delimiter.to_string();
        let mut out = String::new();
        for row in rows {
            // A lone empty field would otherwise read back as an empty row
            if matches!(row.as_slice(), [field] if field.is_empty()) {
                out.push_str("\"\"\n");
                continue;
            }
            let fields: Vec<String> = row.iter().map(|f| self.format_field(f)).collect();
            out.push_str(&fields.join(delimiter.as_str()));
            out.push('\n');
        }
        out
    }

    /// Quote fields the parser would otherwise split, doubling inner quotes
    fn format_field(&self, field: &str) -> String {
        let needs_quotes = field
            .chars()
            .any(|c| c == self.delimiter || matches!(c, '"' | '\n' | '\r'));
        if needs_quotes {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}
