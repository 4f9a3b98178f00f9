//! Integration tests for the build and show commands.

use std::fs;
use std::path::Path;

use dsn_cli::cli::{BuildArgs, InputArgs, OutputFormatArg, ShowArgs};
use dsn_cli::commands::{run_build, run_show};
use dsn_cli::summary::report_table;

fn seed(dir: &Path) {
    fs::write(
        dir.join("Rubriques.csv"),
        "Block Id,Id,DataType Id,Name\nS21,G05,T1,Salaire\nS30,G01,T9,Nom\n",
    )
    .unwrap();
    fs::write(
        dir.join("Data Types.csv"),
        "Id,Name,Nature,Lg Min,Lg Max,Values\nT1,,Numeric,1,5,1=A;2=B\n",
    )
    .unwrap();
    fs::write(dir.join("Blocks.csv"), "Id,Name\nS21,Remuneration\n").unwrap();
    fs::write(
        dir.join("Usage.csv"),
        ",\n,,,,Mensuelle\n,\nS21,Salaire,S21.G05,,O\n",
    )
    .unwrap();
    fs::write(
        dir.join("dsn-dictionary.toml"),
        "[tables]\nfields = \"Rubriques\"\n\n[outputs]\ndictionary = \"Dictionnaire\"\n",
    )
    .unwrap();
}

fn input(dir: &Path) -> InputArgs {
    InputArgs {
        input_dir: Some(dir.to_path_buf()),
        config: None,
    }
}

fn build_args(dir: &Path) -> BuildArgs {
    BuildArgs {
        input: input(dir),
        output_dir: None,
        format: OutputFormatArg::Csv,
        dry_run: false,
        fail_on_unresolved: false,
    }
}

#[test]
fn build_writes_configured_outputs() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    let result = run_build(&build_args(dir.path())).expect("run build");
    assert!(!result.has_errors);
    assert_eq!(result.output_dir, dir.path().join("output"));
    assert!(dir.path().join("output/Dictionnaire.csv").is_file());
    assert!(dir.path().join("output/Nomenclatures.csv").is_file());
    assert_eq!(result.report.fields, 2);
    assert_eq!(result.report.unresolved_data_types.len(), 1);
    assert_eq!(result.report.unresolved_blocks.len(), 1);

    let dictionary = fs::read_to_string(dir.path().join("output/Dictionnaire.csv")).unwrap();
    assert!(dictionary.starts_with("Bloc,Rubrique,Nom du champ,Type,Longueur,Obligatoire"));
    assert!(dictionary.contains("S21 - Remuneration,S21.G05,Salaire,Numeric,1-5,Oui,T1,,"));
    assert!(dictionary.contains("S30.G01,Nom,,,Non,,,"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let args = BuildArgs {
        dry_run: true,
        ..build_args(dir.path())
    };

    let result = run_build(&args).expect("run build");
    assert!(result.written.is_empty());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn unresolved_references_fail_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let args = BuildArgs {
        fail_on_unresolved: true,
        ..build_args(dir.path())
    };

    let result = run_build(&args).expect("run build");
    assert!(result.has_errors);
}

#[test]
fn missing_table_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    fs::remove_file(dir.path().join("Usage.csv")).unwrap();

    let error = run_build(&build_args(dir.path())).unwrap_err();
    assert!(format!("{error:#}").contains("missing required table: Usage"));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn show_reports_unknown_rubrique() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    run_show(&ShowArgs {
        input: input(dir.path()),
        rubrique: "S21.G05".to_string(),
    })
    .expect("known rubrique");
    let error = run_show(&ShowArgs {
        input: input(dir.path()),
        rubrique: "S99.G99".to_string(),
    })
    .unwrap_err();
    assert!(error.to_string().contains("S99.G99"));
}

#[test]
fn report_table_lists_counts() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let result = run_build(&build_args(dir.path())).expect("run build");

    let rendered = report_table(&result.report).to_string();
    assert!(rendered.contains("Rubriques"));
    assert!(rendered.contains("Nomenclature codes"));
    assert!(rendered.contains("Unresolved references"));
}
