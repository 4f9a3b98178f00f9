//! Usage Matrix Interpreter.
//!
//! The usage sheet is not header-keyed. One row names the declaration types,
//! data rows carry the rubrique in a fixed column and one obligation code per
//! declaration type from a fixed column onward. Rows with a blank rubrique
//! are section separators.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dsn_model::{FieldKey, Table, UsageEntry, UsageMap};

/// Positions of the usage sheet, all 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsageLayout {
    /// Row holding the declaration type names.
    pub header_row: usize,
    /// First column holding obligation codes (and declaration type names).
    pub first_code_column: usize,
    /// First row holding a rubrique.
    pub first_data_row: usize,
    /// Column holding the rubrique (FieldKey).
    pub key_column: usize,
}

impl UsageLayout {
    /// Layout of the current usage sheet.
    pub const V1: Self = Self {
        header_row: 1,
        first_code_column: 4,
        first_data_row: 3,
        key_column: 2,
    };
}

impl Default for UsageLayout {
    fn default() -> Self {
        Self::V1
    }
}

fn cells_from(row: &[String], start: usize) -> Vec<String> {
    row.get(start..)
        .unwrap_or_default()
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Declaration type names, in column order (blank names kept for alignment).
pub fn declaration_types(table: &Table, layout: &UsageLayout) -> Vec<String> {
    table
        .row(layout.header_row)
        .map(|row| cells_from(row, layout.first_code_column))
        .unwrap_or_default()
}

/// Build the rubrique → usage entry map.
///
/// Rows shorter than the header read as empty codes for the missing
/// declaration types. A rubrique repeated on a later row replaces the
/// earlier entry.
pub fn interpret_usage(table: &Table, layout: &UsageLayout) -> UsageMap {
    let declaration_types = declaration_types(table, layout);
    let mut usage = UsageMap::new(declaration_types.clone());

    for (offset, row) in table
        .rows()
        .iter()
        .skip(layout.first_data_row)
        .enumerate()
    {
        let rubrique = row.get(layout.key_column).map_or("", |cell| cell.trim());
        if rubrique.is_empty() {
            continue;
        }
        let mut codes = cells_from(row, layout.first_code_column);
        if codes.len() < declaration_types.len() {
            codes.resize(declaration_types.len(), String::new());
        }
        let entry = UsageEntry::from_codes(&declaration_types, &codes);
        let key = FieldKey::from_rubrique(rubrique);
        if usage.insert(key, entry).is_some() {
            debug!(
                rubrique,
                row = layout.first_data_row + offset,
                "rubrique repeated in usage matrix, later row wins"
            );
        }
    }

    debug!(
        entries = usage.len(),
        declaration_types = usage.declaration_types().count(),
        "interpreted usage matrix"
    );
    usage
}
