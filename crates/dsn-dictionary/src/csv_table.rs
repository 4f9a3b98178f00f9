//! CSV files as named tables, and CSV output of built tables.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Position, ReaderBuilder, WriterBuilder};
use tracing::debug;

use dsn_model::{DsnError, Result, Table};

use crate::source::TableSource;

/// Environment variable naming the default input directory.
pub const TABLES_DIR_ENV_VAR: &str = "DSN_TABLES_DIR";

/// Input directory from `DSN_TABLES_DIR`, if set.
pub fn default_tables_dir() -> Option<PathBuf> {
    std::env::var_os(TABLES_DIR_ENV_VAR).map(PathBuf::from)
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read every row of a CSV file, header included, without interpreting it.
///
/// Row `i` of the table is line `i + 1` of the file. The CSV reader drops
/// fully empty lines, so each one is put back as an empty row to keep
/// positional layouts such as the usage matrix aligned. Ragged rows are
/// accepted.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    let mut table = Table::default();
    let mut next_line: u64 = 1;
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        let line = record.position().map_or(next_line, Position::line);
        while next_line < line {
            table.push_row(Vec::<String>::new());
            next_line += 1;
        }
        // Quoted cells may span lines.
        let embedded: usize = record.iter().map(|cell| cell.matches('\n').count()).sum();
        next_line = line + u64::try_from(embedded).unwrap_or(0) + 1;
        table.push_row(record.iter().map(normalize_cell));
    }
    debug!(path = %path.display(), rows = table.len(), "read csv table");
    Ok(table)
}

/// Write a table (header row first) as CSV.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path).map_err(|error| DsnError::io(path, error))?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(file);
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|error| csv_error(path, &error))?;
    }
    writer.flush().map_err(|error| DsnError::io(path, error))?;
    Ok(())
}

fn csv_error(path: &Path, error: &csv::Error) -> DsnError {
    DsnError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// A directory of `<name>.csv` files.
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.csv"))
    }
}

impl TableSource for CsvDirectory {
    fn table(&self, name: &str) -> Result<Option<Table>> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Ok(None);
        }
        read_csv_table(&path).map(Some)
    }
}
