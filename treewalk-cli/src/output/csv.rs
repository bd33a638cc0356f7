//! CSV output formatting for data export.
//!
//! Header row from the column names, one row per item, RFC 4180 quoting.

use super::Column;
use serde::Serialize;

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format an array of items as CSV with specified columns
    pub fn format_with_columns<T: Serialize>(data: &[T], columns: &[Column]) -> String {
        let mut output = columns
            .iter()
            .map(|c| Self::escape_value(&c.name))
            .collect::<Vec<_>>()
            .join(",");

        for item in data {
            if let Ok(json) = serde_json::to_value(item) {
                let row: Vec<String> = columns
                    .iter()
                    .map(|col| {
                        json.get(&col.key)
                            .map(Self::value_to_csv)
                            .unwrap_or_default()
                    })
                    .collect();
                output.push('\n');
                output.push_str(&row.join(","));
            }
        }

        output
    }

    /// Convert a JSON value to a CSV cell
    fn value_to_csv(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => Self::escape_value(s),
            serde_json::Value::Array(arr) => Self::escape_value(&format!("[{} items]", arr.len())),
            serde_json::Value::Object(obj) => {
                Self::escape_value(&format!("{{{} fields}}", obj.len()))
            }
        }
    }

    /// Escape a string value for CSV
    ///
    /// Wraps in quotes if the value contains comma, newline, or quote.
    /// Doubles any existing quotes.
    pub fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestRow {
        id: String,
        label: String,
        depth: usize,
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(CsvOutput::escape_value("hello"), "hello");
        assert_eq!(CsvOutput::escape_value("hello,world"), "\"hello,world\"");
        assert_eq!(CsvOutput::escape_value("hello\nworld"), "\"hello\nworld\"");
        assert_eq!(CsvOutput::escape_value("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_format_with_columns() {
        let data = vec![
            TestRow {
                id: "1".to_string(),
                label: "Root".to_string(),
                depth: 0,
            },
            TestRow {
                id: "2".to_string(),
                label: "A, first".to_string(),
                depth: 1,
            },
        ];
        let columns = vec![
            Column::new("ID", "id"),
            Column::new("NODE", "label"),
            Column::new("DEPTH", "depth"),
        ];
        let output = CsvOutput::format_with_columns(&data, &columns);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, vec!["ID,NODE,DEPTH", "1,Root,0", "2,\"A, first\",1"]);
    }

    #[test]
    fn test_empty_data_is_header_only() {
        let data: Vec<TestRow> = vec![];
        let columns = vec![Column::new("NODE", "label")];
        assert_eq!(CsvOutput::format_with_columns(&data, &columns), "NODE");
    }
}
