//! Command execution: ingest, transform, summarize, and write outputs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use premia_ingest::read_csv;
use premia_model::Table;
use premia_output::{
    SqliteSink, WriteMode, render_categorical_counts, render_grouped_means,
    render_numeric_distributions, write_csv,
};
use premia_stats::{correlation_matrix, describe, grouped_mean, value_counts};
use premia_transform::{PipelineConfig, PipelineRun, normalize_name, run_pipeline};

use crate::cli::{DescribeArgs, RunArgs};
use crate::types::{RunOutcome, RunOutputs};

/// Run the full pipeline: processed file, relational table, charts.
///
/// The in-memory pipeline must succeed; sink failures after that point are
/// collected into the outcome instead of aborting, so an unreachable
/// database never loses the processed table.
pub fn run(args: &RunArgs) -> Result<RunOutcome> {
    let (run, cost_column) = prepare(&args.input, &args.cost_column)?;
    let mut outcome = summarize(&run, cost_column);

    if args.dry_run {
        info!("dry run; skipping all outputs");
        return Ok(outcome);
    }

    let output_dir = output_dir(args);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("output stage: create {}", output_dir.display()))?;

    // Processed file first: a later persistence failure must not lose the
    // prepared table.
    let processed = processed_path(&args.input, &output_dir);
    match write_csv(&run.table, &processed) {
        Ok(()) => outcome.outputs.processed_csv = Some(processed),
        Err(error) => outcome.errors.push(format!("output stage: {error}")),
    }

    let database = args
        .database
        .clone()
        .unwrap_or_else(|| output_dir.join("premia.sqlite"));
    let mode = if args.append {
        WriteMode::Append
    } else {
        WriteMode::Replace
    };
    // Scoped connection: opened for the write, dropped right after.
    let written = SqliteSink::open(&database)
        .and_then(|mut sink| sink.write_table(&run.table, &args.table_name, mode));
    match written {
        Ok(()) => outcome.outputs.database = Some(database),
        Err(error) => outcome.errors.push(format!("persistence stage: {error}")),
    }

    if !args.no_charts {
        render_charts(&run.table, &output_dir, &mut outcome);
    }

    Ok(outcome)
}

/// Run the in-memory pipeline and report statistics only.
pub fn describe_command(args: &DescribeArgs) -> Result<RunOutcome> {
    let (run, cost_column) = prepare(&args.input, &args.cost_column)?;
    Ok(summarize(&run, cost_column))
}

/// Ingest and transform; halts before any output on failure.
fn prepare(input: &Path, cost_column: &str) -> Result<(PipelineRun, String)> {
    let table = read_csv(input).context("ingest stage")?;
    info!(rows = table.height(), columns = table.width(), "ingested input");
    let config = PipelineConfig {
        cost_column: cost_column.to_string(),
    };
    let run = run_pipeline(&table, &config).context("transform stage")?;
    Ok((run, normalize_name(cost_column)))
}

/// Derived statistics over the prepared table; read-only.
fn summarize(run: &PipelineRun, cost_column: String) -> RunOutcome {
    let table = &run.table;
    let frequencies = table
        .categorical_columns()
        .into_iter()
        .map(|column| {
            let counts = value_counts(table, &column.name).unwrap_or_default();
            (column.name.clone(), counts)
        })
        .collect();
    let grouped = table
        .categorical_columns()
        .into_iter()
        .filter_map(|column| {
            grouped_mean(table, &cost_column, &column.name)
                .ok()
                .map(|means| (column.name.clone(), means))
        })
        .collect();
    RunOutcome {
        rows: table.height(),
        cost_column,
        renames: run.renames.clone(),
        clamped: run.clamped.clone(),
        numeric: describe(table),
        frequencies,
        correlation: correlation_matrix(table),
        grouped,
        outputs: RunOutputs::default(),
        errors: Vec::new(),
    }
}

fn render_charts(table: &Table, output_dir: &Path, outcome: &mut RunOutcome) {
    let numeric = output_dir.join("numeric_distributions.svg");
    match render_numeric_distributions(table, &numeric) {
        Ok(()) if numeric.exists() => outcome.outputs.charts.push(numeric),
        Ok(()) => {}
        Err(error) => outcome.errors.push(format!("chart stage: {error}")),
    }

    let counts = output_dir.join("categorical_counts.svg");
    match render_categorical_counts(&outcome.frequencies, &counts) {
        Ok(()) if counts.exists() => outcome.outputs.charts.push(counts),
        Ok(()) => {}
        Err(error) => outcome.errors.push(format!("chart stage: {error}")),
    }

    let comparison = output_dir.join("cost_by_category.svg");
    match render_grouped_means(&outcome.cost_column, &outcome.grouped, &comparison) {
        Ok(()) if comparison.exists() => outcome.outputs.charts.push(comparison),
        Ok(()) => {}
        Err(error) => outcome.errors.push(format!("chart stage: {error}")),
    }
}

fn output_dir(args: &RunArgs) -> PathBuf {
    args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    })
}

fn processed_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "data".to_string(), |s| s.to_string_lossy().into_owned());
    output_dir.join(format!("{stem}_processed.csv"))
}
