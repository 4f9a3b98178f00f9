use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use dsn_dictionary::{
    BuildReport, CsvDirectory, DictionaryConfig, DictionaryOutput, OutputFormat, build,
    default_tables_dir, write_outputs,
};

use crate::cli::{BuildArgs, InputArgs, OutputFormatArg, ShowArgs};
use crate::summary::rubrique_table;

#[derive(Debug)]
pub struct BuildResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub report: BuildReport,
    pub dry_run: bool,
    pub has_errors: bool,
}

/// Input directory from the argument, falling back to `DSN_TABLES_DIR`.
fn resolve_input_dir(input: &InputArgs) -> Result<PathBuf> {
    input
        .input_dir
        .clone()
        .or_else(default_tables_dir)
        .ok_or_else(|| {
            anyhow!(
                "no input directory given and {} is not set",
                dsn_dictionary::TABLES_DIR_ENV_VAR
            )
        })
}

fn load(input: &InputArgs) -> Result<(PathBuf, DictionaryConfig, DictionaryOutput)> {
    let input_dir = resolve_input_dir(input)?;
    let config = DictionaryConfig::resolve(input.config.as_deref(), &input_dir)
        .context("load configuration")?;
    let output = build(&CsvDirectory::new(&input_dir), &config)
        .with_context(|| format!("build dictionary from {}", input_dir.display()))?;
    Ok((input_dir, config, output))
}

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let (input_dir, config, output) = load(&args.input)?;
    let span = info_span!("write", input = %input_dir.display());
    let _guard = span.enter();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| input_dir.join("output"));
    let written = if args.dry_run {
        info!("dry run, skipping output tables");
        Vec::new()
    } else {
        write_outputs(
            &output,
            &output_dir,
            &config.outputs,
            output_format(args.format),
        )
        .with_context(|| format!("write outputs to {}", output_dir.display()))?
    };

    let has_errors = args.fail_on_unresolved && output.report.has_unresolved();
    Ok(BuildResult {
        input_dir,
        output_dir,
        written,
        report: output.report,
        dry_run: args.dry_run,
        has_errors,
    })
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let (_, _, output) = load(&args.input)?;
    let row = output
        .find(&args.rubrique)
        .ok_or_else(|| anyhow!("rubrique {} not found in fields table", args.rubrique))?;
    let usage = output.usage.get(&row.rubrique);
    println!(
        "{}",
        rubrique_table(row, usage, output.usage.declaration_types())
    );
    if let Some(nomenclature) = output.nomenclatures.get(&row.nomenclature) {
        for value in &nomenclature.values {
            println!("  {} = {}", value.code, value.label);
        }
    }
    Ok(())
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
