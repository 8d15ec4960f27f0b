use super::FormatConfig;
use crate::value::{Array, Object, Value};

/// JSON rendering of `Value` trees
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(&self, value: &Value, config: &FormatConfig) -> String {
        if config.pretty || config.sort_keys {
            Self::format_value(value, 0, config)
        } else {
            value.to_string()
        }
    }

    fn format_value(value: &Value, indent: usize, config: &FormatConfig) -> String {
        match value {
            Value::Array(arr) => Self::format_array(arr, indent, config),
            Value::Object(obj) => Self::format_object(obj, indent, config),
            scalar => scalar.to_string(),
        }
    }

    fn indentation(indent: usize, config: &FormatConfig) -> (String, String) {
        if !config.pretty {
            return (String::new(), String::new());
        }
        let outer = " ".repeat(indent * config.indent_spaces);
        let inner = " ".repeat((indent + 1) * config.indent_spaces);
        (outer, inner)
    }

    fn wrap(
        open: char,
        items: Vec<String>,
        close: char,
        outer: &str,
        config: &FormatConfig,
    ) -> String {
        if config.pretty {
            format!("{open}\n{}\n{outer}{close}", items.join(",\n"))
        } else {
            format!("{open}{}{close}", items.join(","))
        }
    }

    fn format_array(arr: &Array, indent: usize, config: &FormatConfig) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        let (outer, inner) = Self::indentation(indent, config);
        let items = arr
            .iter()
            .map(|v| format!("{inner}{}", Self::format_value(v, indent + 1, config)))
            .collect();

        Self::wrap('[', items, ']', &outer, config)
    }

    fn format_object(obj: &Object, indent: usize, config: &FormatConfig) -> String {
        if obj.is_empty() {
            return "{}".to_string();
        }

        let (outer, inner) = Self::indentation(indent, config);
        let mut entries: Vec<(&String, &Value)> = obj.iter().collect();
        if config.sort_keys {
            entries.sort_by_key(|(k, _)| *k);
        }

        let separator = if config.pretty { ": " } else { ":" };
        let items = entries
            .into_iter()
            .map(|(k, v)| {
                format!(
                    "{inner}{}{separator}{}",
                    Value::from(k.as_str()),
                    Self::format_value(v, indent + 1, config)
                )
            })
            .collect();

        Self::wrap('{', items, '}', &outer, config)
    }
}
