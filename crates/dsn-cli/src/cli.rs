//! CLI argument definitions for the DSN dictionary builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dsn-dictionary",
    version,
    about = "DSN data dictionary - Join DSN reference tables into a flat dictionary",
    long_about = "Build the DSN data dictionary from the fields, data types, blocks and\n\
                  usage matrix tables (one CSV file per table), producing a dictionary\n\
                  table and a nomenclatures table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the dictionary and nomenclature tables.
    Build(BuildArgs),

    /// Show the dictionary entry and usage details of one rubrique.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Folder holding one CSV file per input table (default: $DSN_TABLES_DIR).
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Configuration file (default: <INPUT_DIR>/dsn-dictionary.toml if present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory for generated tables (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Build and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with an error status when a field references an unknown data type or block.
    #[arg(long = "fail-on-unresolved")]
    pub fail_on_unresolved: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Rubrique to look up, e.g. S21.G00.51.011.
    #[arg(long = "rubrique", value_name = "RUBRIQUE")]
    pub rubrique: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
