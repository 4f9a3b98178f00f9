//! DSN data dictionary builder.
//!
//! Joins the fields, data types, blocks and usage matrix tables into a
//! flattened dictionary (one row per rubrique) and a flattened nomenclature
//! table (one row per code).
//!
//! ```rust,ignore
//! use dsn_dictionary::{CsvDirectory, DictionaryConfig, build};
//!
//! let output = build(&CsvDirectory::new("tables"), &DictionaryConfig::default())?;
//! println!("{} rubriques", output.dictionary.len());
//! ```

#![deny(unsafe_code)]

pub mod builder;
pub mod config;
pub mod csv_table;
pub mod flatten;
pub mod loader;
pub mod nomenclature;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod usage;

pub use crate::config::{CONFIG_FILE_NAME, DictionaryConfig, OutputNames, TableNames};
pub use crate::csv_table::{
    CsvDirectory, TABLES_DIR_ENV_VAR, default_tables_dir, read_csv_table, write_csv_table,
};
pub use crate::loader::HeaderPolicy;
pub use crate::output::{DictionaryOutput, OutputFormat, write_outputs};
pub use crate::pipeline::{SourceTables, build, build_from_tables, fetch_tables};
pub use crate::report::BuildReport;
pub use crate::source::{TableSource, Workbook, fetch_required};
pub use crate::usage::UsageLayout;
