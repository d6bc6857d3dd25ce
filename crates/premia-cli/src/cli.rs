//! CLI argument definitions for the premia pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "premia",
    version,
    about = "Prepare insured-individual records for relational storage and analysis",
    long_about = "Ingest a delimited record set, normalize its column names into \
                  storage-safe identifiers, enforce the non-negative cost invariant, \
                  and write the prepared table to a processed file, a SQLite table, \
                  and summary charts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write every output.
    Run(RunArgs),

    /// Run the in-memory pipeline and print statistics only.
    Describe(DescribeArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the delimited input file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for generated files (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// SQLite database file (default: <output-dir>/premia.sqlite).
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Relational table name for the prepared data.
    #[arg(long = "table-name", default_value = "insurance")]
    pub table_name: String,

    /// Append to an existing relational table instead of replacing it.
    #[arg(long = "append")]
    pub append: bool,

    /// Cost column to enforce, in raw or normalized spelling.
    #[arg(long = "cost-column", default_value = "Insurance_Cost")]
    pub cost_column: String,

    /// Skip chart rendering.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Run the pipeline and report without writing any output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Path to the delimited input file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cost column to enforce, in raw or normalized spelling.
    #[arg(long = "cost-column", default_value = "Insurance_Cost")]
    pub cost_column: String,
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
