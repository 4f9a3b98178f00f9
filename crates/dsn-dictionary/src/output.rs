//! Output tables of a build and their writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use dsn_model::{
    DICTIONARY_COLUMNS, DictionaryRow, DsnError, NOMENCLATURE_COLUMNS, NomenclatureRow,
    NomenclatureSet, Result, Table, UsageMap,
};

use crate::config::OutputNames;
use crate::csv_table::write_csv_table;
use crate::report::BuildReport;

/// Everything a build produces.
#[derive(Debug, Clone, Default)]
pub struct DictionaryOutput {
    pub dictionary: Vec<DictionaryRow>,
    pub nomenclature_rows: Vec<NomenclatureRow>,
    pub nomenclatures: NomenclatureSet,
    pub usage: UsageMap,
    pub report: BuildReport,
}

impl DictionaryOutput {
    /// The dictionary as a header + rows grid.
    pub fn dictionary_table(&self) -> Table {
        let mut table = Table::with_header(DICTIONARY_COLUMNS);
        for row in &self.dictionary {
            table.push_row(row.to_cells());
        }
        table
    }

    /// The nomenclatures as a header + rows grid.
    pub fn nomenclature_table(&self) -> Table {
        let mut table = Table::with_header(NOMENCLATURE_COLUMNS);
        for row in &self.nomenclature_rows {
            table.push_row(row.to_cells());
        }
        table
    }

    /// Dictionary row of one rubrique, if the fields table has it.
    pub fn find(&self, rubrique: &str) -> Option<&DictionaryRow> {
        self.dictionary
            .iter()
            .find(|row| row.rubrique.as_str() == rubrique)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Write both output tables into `dir`, returning the written paths.
///
/// Both files are written to temporary siblings first and only moved into
/// place once both writes succeeded. A failure while moving restores the
/// files that were there before, so the directory never mixes old and new
/// outputs.
pub fn write_outputs(
    output: &DictionaryOutput,
    dir: &Path,
    names: &OutputNames,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|error| DsnError::io(dir, error))?;
    let dictionary_path = dir.join(format!("{}.{}", names.dictionary, format.extension()));
    let nomenclature_path = dir.join(format!("{}.{}", names.nomenclatures, format.extension()));
    let staged = [
        Staged::new(&dictionary_path),
        Staged::new(&nomenclature_path),
    ];

    let written = match format {
        OutputFormat::Csv => write_csv_table(&staged[0].tmp, &output.dictionary_table())
            .and_then(|()| write_csv_table(&staged[1].tmp, &output.nomenclature_table())),
        OutputFormat::Json => write_json(&staged[0].tmp, &output.dictionary)
            .and_then(|()| write_json(&staged[1].tmp, &output.nomenclature_rows)),
    };
    if let Err(error) = written.and_then(|()| commit(&staged)) {
        for file in &staged {
            let _ = std::fs::remove_file(&file.tmp);
        }
        return Err(error);
    }

    info!(
        dictionary = %dictionary_path.display(),
        nomenclatures = %nomenclature_path.display(),
        "wrote output tables"
    );
    Ok(vec![dictionary_path, nomenclature_path])
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|error| DsnError::io(path, error))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|error| DsnError::io(path, error))
}

/// An output file and the sibling paths used while replacing it.
struct Staged {
    target: PathBuf,
    tmp: PathBuf,
    backup: PathBuf,
}

impl Staged {
    fn new(target: &Path) -> Self {
        let sibling = |suffix: &str| {
            let mut path = target.as_os_str().to_owned();
            path.push(suffix);
            PathBuf::from(path)
        };
        Self {
            target: target.to_path_buf(),
            tmp: sibling(".tmp"),
            backup: sibling(".bak"),
        }
    }
}

/// Move every staged file into place, or none of them.
fn commit(staged: &[Staged]) -> Result<()> {
    for file in staged {
        if file.target.is_dir() {
            return Err(DsnError::io(
                &file.target,
                std::io::Error::other("output path is a directory"),
            ));
        }
    }
    let mut done: Vec<(&Staged, bool)> = Vec::with_capacity(staged.len());
    for file in staged {
        match swap_in(file) {
            Ok(had_previous) => done.push((file, had_previous)),
            Err(error) => {
                for (file, had_previous) in done.iter().rev() {
                    if *had_previous {
                        let _ = std::fs::rename(&file.backup, &file.target);
                    } else {
                        let _ = std::fs::remove_file(&file.target);
                    }
                }
                return Err(error);
            }
        }
    }
    for (file, had_previous) in done {
        if had_previous {
            let _ = std::fs::remove_file(&file.backup);
        }
    }
    Ok(())
}

/// Replace one target with its temporary file, keeping the old file as a backup.
fn swap_in(file: &Staged) -> Result<bool> {
    let had_previous = file.target.exists();
    if had_previous {
        std::fs::rename(&file.target, &file.backup)
            .map_err(|error| DsnError::io(&file.target, error))?;
    }
    if let Err(error) = std::fs::rename(&file.tmp, &file.target) {
        if had_previous {
            let _ = std::fs::rename(&file.backup, &file.target);
        }
        return Err(DsnError::io(&file.target, error));
    }
    Ok(had_previous)
}
