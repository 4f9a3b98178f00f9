//! The full batch build.
//!
//! All four tables are fetched before anything is extracted or joined, so a
//! missing table aborts the build with nothing produced. Past that point the
//! build cannot fail.

use std::time::Instant;

use tracing::{info, info_span};

use dsn_model::{Result, Table};

use crate::builder::{JoinInputs, build_dictionary};
use crate::config::{DictionaryConfig, TableNames};
use crate::flatten::flatten_nomenclatures;
use crate::loader::{load_blocks, load_data_types, load_fields};
use crate::nomenclature::extract_nomenclatures;
use crate::output::DictionaryOutput;
use crate::report::BuildReport;
use crate::source::{TableSource, fetch_required};
use crate::usage::interpret_usage;

/// The four raw input tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTables {
    pub fields: Table,
    pub data_types: Table,
    pub blocks: Table,
    pub usage: Table,
}

/// Fetch every input table, failing on the first missing one.
pub fn fetch_tables(source: &dyn TableSource, names: &TableNames) -> Result<SourceTables> {
    Ok(SourceTables {
        fields: fetch_required(source, &names.fields)?,
        data_types: fetch_required(source, &names.data_types)?,
        blocks: fetch_required(source, &names.blocks)?,
        usage: fetch_required(source, &names.usage)?,
    })
}

/// Extract and join already fetched tables.
pub fn build_from_tables(tables: &SourceTables, config: &DictionaryConfig) -> DictionaryOutput {
    let names = &config.tables;
    let policy = config.header_policy;

    let fields = load_fields(&names.fields, &tables.fields, policy);
    let data_types = load_data_types(&names.data_types, &tables.data_types, policy);
    let blocks = load_blocks(&names.blocks, &tables.blocks, policy);

    let nomenclatures = extract_nomenclatures(&data_types);
    let usage = interpret_usage(&tables.usage, &config.usage_layout);

    let mut report = BuildReport {
        data_types: data_types.len(),
        blocks: blocks.len(),
        nomenclatures: nomenclatures.len(),
        usage_entries: usage.len(),
        declaration_types: usage.declaration_types().count(),
        ..BuildReport::default()
    };
    let dictionary = build_dictionary(
        &JoinInputs {
            fields: &fields,
            data_types: &data_types,
            blocks: &blocks,
            usage: &usage,
            nomenclatures: &nomenclatures,
        },
        &mut report,
    );
    let nomenclature_rows = flatten_nomenclatures(&nomenclatures);
    report.nomenclature_rows = nomenclature_rows.len();

    DictionaryOutput {
        dictionary,
        nomenclature_rows,
        nomenclatures,
        usage,
        report,
    }
}

/// Fetch, extract and join: the whole dictionary build.
pub fn build(source: &dyn TableSource, config: &DictionaryConfig) -> Result<DictionaryOutput> {
    let span = info_span!("build");
    let _guard = span.enter();
    let start = Instant::now();

    let tables = fetch_tables(source, &config.tables)?;
    let output = build_from_tables(&tables, config);

    let report = &output.report;
    info!(
        fields = report.fields,
        nomenclatures = report.nomenclatures,
        codes = report.nomenclature_rows,
        usage_entries = report.usage_entries,
        unresolved_data_types = report.unresolved_data_types.len(),
        unresolved_blocks = report.unresolved_blocks.len(),
        without_usage = report.without_usage.len(),
        elapsed = ?start.elapsed(),
        "dictionary built"
    );
    Ok(output)
}
