//! Named input tables.
//!
//! The builder never looks tables up globally: every table is fetched by name
//! from a [`TableSource`] handed to it.

use std::collections::BTreeMap;

use dsn_model::{DsnError, Result, Table};

/// Anything that can hand out a table by name.
pub trait TableSource {
    /// The named table, or `None` when the source has no such table.
    fn table(&self, name: &str) -> Result<Option<Table>>;
}

/// Fetch a table that must exist, failing with [`DsnError::MissingTable`].
pub fn fetch_required(source: &dyn TableSource, name: &str) -> Result<Table> {
    source
        .table(name)?
        .ok_or_else(|| DsnError::missing_table(name))
}

/// In-memory set of named tables.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    tables: BTreeMap<String, Table>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) -> Option<Table> {
        self.tables.insert(name.into(), table)
    }

    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert(name, table);
        self
    }
}

impl TableSource for Workbook {
    fn table(&self, name: &str) -> Result<Option<Table>> {
        Ok(self.tables.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_is_reported_by_name() {
        let workbook = Workbook::new().with_table("Blocks", Table::with_header(["Id", "Name"]));
        assert!(fetch_required(&workbook, "Blocks").is_ok());
        let error = fetch_required(&workbook, "Usage").unwrap_err();
        assert!(error.is_missing_table());
        assert_eq!(error.to_string(), "missing required table: Usage");
    }
}
