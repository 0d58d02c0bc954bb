// crates/fibonrose-cli/src/output.rs
//
// Output formatting utilities for the FibonroseTrust CLI.
// Supports table and JSON output modes.

use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Print `data` as JSON, or print the table built from `rows`.
pub fn emit<T: Serialize, R: Tabled>(format: OutputFormat, data: &T, rows: &[R]) {
    match format {
        OutputFormat::Json => println!("{}", format_json(data)),
        OutputFormat::Table => println!("{}", format_table(rows)),
    }
}

/// A two-column key/value row for single-record output.
#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_headers_and_values() {
        let table = format_table(&[FieldRow::new("Score", 42)]);
        assert!(table.contains("Field"));
        assert!(table.contains("Score"));
        assert!(table.contains("42"));
    }

    #[test]
    fn json_is_pretty() {
        let json = format_json(&vec![1, 2]);
        assert!(json.contains('\n'));
    }
}
