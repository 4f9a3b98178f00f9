//! Generic two-dimensional tables and header-keyed records.

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A row keyed by column header.
pub type Record = BTreeMap<String, String>;

/// A rectangular (or ragged) grid of text cells.
///
/// For ordinary reference tables row 0 is the header. The usage matrix uses
/// its own layout and reads the grid positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from anything that yields rows of string-like cells.
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Create a table holding only a header row.
    pub fn with_header<C: Into<String>>(header: impl IntoIterator<Item = C>) -> Self {
        Self {
            rows: vec![header.into_iter().map(Into::into).collect()],
        }
    }

    pub fn push_row<C: Into<String>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell text, or an empty string when the row or column is absent.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// The header row (empty for an empty table).
    pub fn header(&self) -> &[String] {
        self.row(0).unwrap_or(&[])
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Total number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Get a field value from a record, returning empty string if not present.
pub fn get_field(record: &Record, key: &str) -> String {
    record.get(key).cloned().unwrap_or_default()
}

/// Get an optional field value from a record (None if empty or missing).
pub fn get_optional(record: &Record, key: &str) -> Option<String> {
    record.get(key).filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_out_of_range_is_empty() {
        let table = Table::from_rows([vec!["a", "b"], vec!["1"]]);
        assert_eq!(table.cell(1, 0), "1");
        assert_eq!(table.cell(1, 1), "");
        assert_eq!(table.cell(7, 0), "");
    }

    #[test]
    fn header_and_data_rows() {
        let mut table = Table::with_header(["Id", "Name"]);
        assert!(table.data_rows().is_empty());
        table.push_row(["S21", "Remuneration"]);
        assert_eq!(table.header(), ["Id", "Name"]);
        assert_eq!(table.data_rows().len(), 1);
        assert_eq!(table.len(), 2);
        assert!(Table::default().header().is_empty());
    }

    #[test]
    fn optional_fields_treat_empty_as_missing() {
        let mut record = Record::new();
        record.insert("Name".to_string(), String::new());
        record.insert("Id".to_string(), "T1".to_string());
        assert_eq!(get_optional(&record, "Name"), None);
        assert_eq!(get_optional(&record, "Id").as_deref(), Some("T1"));
        assert_eq!(get_field(&record, "Values"), "");
    }
}
