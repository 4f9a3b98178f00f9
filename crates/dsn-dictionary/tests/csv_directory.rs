//! Builds from a directory of CSV files and writes the outputs back.

use std::fs;
use std::path::Path;

use dsn_dictionary::{
    CsvDirectory, DictionaryConfig, OutputFormat, build, read_csv_table, write_outputs,
};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn seed(dir: &Path) {
    write(
        dir,
        "Fields.csv",
        "Block Id,Id,DataType Id,Name,Description,Comment\n\
         S21,G05,T1,Salaire,Montant,\n\
         S21,G06,T2,Motif,,\"a, b\"\n",
    );
    write(
        dir,
        "Data Types.csv",
        "Id,Name,Nature,Lg Min,Lg Max,Values\n\
         T1,,Numeric,1,5,1=A;2=B\n\
         T2,Motif,Alphanumeric,,2,02\n",
    );
    write(dir, "Blocks.csv", "Id,Name\nS21,Remuneration\n");
    write(
        dir,
        "Usage.csv",
        "Matrice,,,,\n\
         ,,,,Mensuelle,Arret\n\
         ,,,,,\n\
         S21,Salaire,S21.G05,,O,\n\
         ,,,,,\n\
         S21,Motif,S21.G06,,,C\n",
    );
}

#[test]
fn builds_and_writes_csv_outputs() {
    let input = tempfile::tempdir().unwrap();
    seed(input.path());
    let config = DictionaryConfig::default();

    let output = build(&CsvDirectory::new(input.path()), &config).expect("build");
    assert_eq!(output.dictionary.len(), 2);
    assert_eq!(output.dictionary[1].obligation.as_str(), "Conditionnel");
    assert_eq!(output.dictionary[1].length, "-2");
    assert_eq!(output.dictionary[1].nomenclature, "");
    assert_eq!(output.dictionary[1].comment, "a, b");

    let out_dir = input.path().join("out");
    let paths = write_outputs(&output, &out_dir, &config.outputs, OutputFormat::Csv).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("Dictionary.csv"));

    let dictionary = read_csv_table(&paths[0]).unwrap();
    assert_eq!(dictionary, output.dictionary_table());
    let nomenclatures = read_csv_table(&paths[1]).unwrap();
    assert_eq!(nomenclatures.len(), 3);
    assert!(
        fs::read_dir(&out_dir)
            .unwrap()
            .all(|entry| !entry.unwrap().path().to_string_lossy().ends_with(".tmp"))
    );
}

#[test]
fn writes_json_outputs() {
    let input = tempfile::tempdir().unwrap();
    seed(input.path());
    let config = DictionaryConfig::default();
    let output = build(&CsvDirectory::new(input.path()), &config).expect("build");

    let paths = write_outputs(&output, input.path(), &config.outputs, OutputFormat::Json).unwrap();
    let raw = fs::read_to_string(&paths[1]).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[0]["nomenclature"], "T1");
    assert_eq!(rows[1]["label"], "B");
}

#[test]
fn missing_csv_file_is_a_missing_table() {
    let input = tempfile::tempdir().unwrap();
    seed(input.path());
    fs::remove_file(input.path().join("Blocks.csv")).unwrap();

    let error = build(&CsvDirectory::new(input.path()), &DictionaryConfig::default()).unwrap_err();
    assert!(error.is_missing_table());
    assert!(!input.path().join("out").exists());
}

#[test]
fn blank_separator_line_keeps_usage_rows_in_place() {
    let input = tempfile::tempdir().unwrap();
    seed(input.path());
    write(
        input.path(),
        "Usage.csv",
        "Matrice\n,,,,Mensuelle\n\nS21,Salaire,S21.G05,,O\n",
    );

    let output = build(&CsvDirectory::new(input.path()), &DictionaryConfig::default()).unwrap();
    let salaire = output.find("S21.G05").expect("salaire row");
    assert_eq!(salaire.obligation.as_str(), "Oui");
    assert_eq!(output.report.usage_entries, 1);
}

fn leftovers(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp") || name.ends_with(".bak"))
        .collect()
}

#[test]
fn failed_write_leaves_previous_outputs_untouched() {
    let input = tempfile::tempdir().unwrap();
    seed(input.path());
    let config = DictionaryConfig::default();
    let output = build(&CsvDirectory::new(input.path()), &config).expect("build");

    let out_dir = input.path().join("out");
    fs::create_dir_all(out_dir.join("Nomenclatures.csv")).unwrap();
    write(&out_dir, "Dictionary.csv", "OLD");

    write_outputs(&output, &out_dir, &config.outputs, OutputFormat::Csv).unwrap_err();
    assert_eq!(fs::read_to_string(out_dir.join("Dictionary.csv")).unwrap(), "OLD");
    assert!(out_dir.join("Nomenclatures.csv").is_dir());
    assert!(leftovers(&out_dir).is_empty());

    fs::remove_dir(out_dir.join("Nomenclatures.csv")).unwrap();
    write(&out_dir, "Nomenclatures.csv", "OLD");
    write_outputs(&output, &out_dir, &config.outputs, OutputFormat::Csv).unwrap();
    assert_eq!(
        read_csv_table(&out_dir.join("Dictionary.csv")).unwrap(),
        output.dictionary_table()
    );
    assert_ne!(fs::read_to_string(out_dir.join("Nomenclatures.csv")).unwrap(), "OLD");
    assert!(leftovers(&out_dir).is_empty());
}
