//! Table Loader: header row + data rows into header-keyed records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use dsn_model::{BlockRecord, DataTypeRecord, FieldRecord, Record, Table};

/// What to do when a header name appears more than once in a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderPolicy {
    /// The rightmost column with that name provides the value.
    #[default]
    LastWins,
    /// The leftmost column with that name provides the value.
    FirstWins,
}

/// Turn a table into one record per data row.
///
/// Missing cells read as empty strings, cells beyond the header are ignored,
/// and columns with a blank header name are dropped.
pub fn load_records(table_name: &str, table: &Table, policy: HeaderPolicy) -> Vec<Record> {
    let headers: Vec<String> = table
        .header()
        .iter()
        .map(|name| name.trim().trim_matches('\u{feff}').to_string())
        .collect();
    warn_duplicate_headers(table_name, &headers, policy);

    table
        .data_rows()
        .iter()
        .map(|row| {
            let mut record = Record::new();
            for (idx, key) in headers.iter().enumerate() {
                if key.is_empty() {
                    continue;
                }
                let value = row.get(idx).map_or("", |cell| cell.trim()).to_string();
                match policy {
                    HeaderPolicy::LastWins => {
                        record.insert(key.clone(), value);
                    }
                    HeaderPolicy::FirstWins => {
                        record.entry(key.clone()).or_insert(value);
                    }
                }
            }
            record
        })
        .collect()
}

fn warn_duplicate_headers(table_name: &str, headers: &[String], policy: HeaderPolicy) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for header in headers.iter().filter(|name| !name.is_empty()) {
        if !seen.insert(header.as_str()) && reported.insert(header.as_str()) {
            warn!(
                table = table_name,
                header = header.as_str(),
                ?policy,
                "duplicate column header"
            );
        }
    }
}

pub fn load_fields(table_name: &str, table: &Table, policy: HeaderPolicy) -> Vec<FieldRecord> {
    load_records(table_name, table, policy)
        .iter()
        .map(FieldRecord::from_record)
        .collect()
}

pub fn load_data_types(
    table_name: &str,
    table: &Table,
    policy: HeaderPolicy,
) -> Vec<DataTypeRecord> {
    load_records(table_name, table, policy)
        .iter()
        .map(DataTypeRecord::from_record)
        .collect()
}

pub fn load_blocks(table_name: &str, table: &Table, policy: HeaderPolicy) -> Vec<BlockRecord> {
    load_records(table_name, table, policy)
        .iter()
        .map(BlockRecord::from_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_map_header_to_cell() {
        let table = Table::from_rows([
            vec!["Id", "Name", ""],
            vec!["S21", " Remuneration ", "ignored"],
            vec!["S10"],
        ]);
        let records = load_records("Blocks", &table, HeaderPolicy::LastWins);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Name"], "Remuneration");
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[1]["Name"], "");
    }

    #[test]
    fn duplicate_headers_follow_policy() {
        let table = Table::from_rows([vec!["Id", "Name", "Name"], vec!["S21", "first", "second"]]);
        let last = load_records("Blocks", &table, HeaderPolicy::LastWins);
        assert_eq!(last[0]["Name"], "second");
        let first = load_records("Blocks", &table, HeaderPolicy::FirstWins);
        assert_eq!(first[0]["Name"], "first");
    }

    #[test]
    fn header_only_table_has_no_records() {
        let table = Table::with_header(["Id", "Name"]);
        assert!(load_blocks("Blocks", &table, HeaderPolicy::default()).is_empty());
        assert!(load_fields("Fields", &Table::default(), HeaderPolicy::default()).is_empty());
    }

    #[test]
    fn typed_records_read_known_columns() {
        let table = Table::from_rows([
            vec!["Block Id", "Id", "DataType Id", "Name", "Description"],
            vec!["S21", "G05", "T1", "Salaire", "Montant brut"],
        ]);
        let fields = load_fields("Fields", &table, HeaderPolicy::default());
        assert_eq!(fields[0].key().as_str(), "S21.G05");
        assert_eq!(fields[0].data_type_id, "T1");
        assert_eq!(fields[0].description, "Montant brut");
        assert_eq!(fields[0].comment, "");
    }
}
