//! Summary chart rendering.
//!
//! Derived solely from the prepared table and its aggregates; none of this
//! feeds back into the pipeline. Charts are SVG so rendering stays free of
//! system font dependencies.

use std::path::Path;

use plotters::prelude::{
    ChartBuilder, IntoDrawingArea, Rectangle, SVGBackend, BLUE, GREEN, RED, WHITE,
};
use plotters::style::Color;
use tracing::debug;

use premia_model::{PipelineError, Result, Table};
use premia_stats::{GroupMean, ValueCount};

const HISTOGRAM_BINS: usize = 20;

fn chart_error(path: &Path, error: impl std::fmt::Display) -> PipelineError {
    PipelineError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Grid dimensions for `n` panels: near-square, wide before tall.
fn grid(n: usize) -> (usize, usize) {
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    (rows, cols)
}

fn histogram_bins(values: &[f64]) -> Vec<(f64, f64, u32)> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // A constant column still gets one visible bar.
    let span = if max > min { max - min } else { 1.0 };
    let width = span / HISTOGRAM_BINS as f64;
    let mut bins = vec![0u32; HISTOGRAM_BINS];
    for value in values {
        let mut idx = ((value - min) / width) as usize;
        if idx >= HISTOGRAM_BINS {
            idx = HISTOGRAM_BINS - 1;
        }
        bins[idx] += 1;
    }
    bins.iter()
        .enumerate()
        .map(|(idx, count)| {
            let lo = min + idx as f64 * width;
            (lo, lo + width, *count)
        })
        .collect()
}

/// Render one histogram per numeric column into a single SVG grid.
///
/// A table without numeric data produces no file.
pub fn render_numeric_distributions(table: &Table, path: &Path) -> Result<()> {
    let panels: Vec<(String, Vec<f64>)> = table
        .numeric_columns()
        .into_iter()
        .map(|column| {
            let values: Vec<f64> = column
                .numeric_values()
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect();
            (column.name.clone(), values)
        })
        .filter(|(_, values)| !values.is_empty())
        .collect();
    if panels.is_empty() {
        debug!("no numeric data; skipping distribution chart");
        return Ok(());
    }

    let root = SVGBackend::new(path, (1280, 960)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(path, e))?;
    let (rows, cols) = grid(panels.len());
    let areas = root.split_evenly((rows, cols));
    for ((name, values), area) in panels.iter().zip(areas.iter()) {
        let bins = histogram_bins(values);
        let x_min = bins.first().map_or(0.0, |b| b.0);
        let x_max = bins.last().map_or(1.0, |b| b.1);
        let y_max = bins.iter().map(|b| b.2).max().unwrap_or(0) + 1;
        let mut chart = ChartBuilder::on(area)
            .caption(format!("Distribution of {name}"), ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(28)
            .y_label_area_size(44)
            .build_cartesian_2d(x_min..x_max, 0u32..y_max)
            .map_err(|e| chart_error(path, e))?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .draw()
            .map_err(|e| chart_error(path, e))?;
        chart
            .draw_series(bins.iter().map(|(lo, hi, count)| {
                Rectangle::new([(*lo, 0), (*hi, *count)], BLUE.mix(0.45).filled())
            }))
            .map_err(|e| chart_error(path, e))?;
    }
    root.present().map_err(|e| chart_error(path, e))?;
    debug!(path = %path.display(), panels = panels.len(), "rendered numeric distributions");
    Ok(())
}

/// Render one bar chart per categorical column into a single SVG grid.
///
/// `counts` pairs each column name with its frequency table; empty input
/// produces no file.
pub fn render_categorical_counts(counts: &[(String, Vec<ValueCount>)], path: &Path) -> Result<()> {
    let panels: Vec<&(String, Vec<ValueCount>)> =
        counts.iter().filter(|(_, c)| !c.is_empty()).collect();
    if panels.is_empty() {
        debug!("no categorical data; skipping counts chart");
        return Ok(());
    }

    let root = SVGBackend::new(path, (1280, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(path, e))?;
    let (rows, cols) = grid(panels.len());
    let areas = root.split_evenly((rows, cols));
    for ((name, counts), area) in panels.iter().zip(areas.iter()) {
        let labels: Vec<String> = counts.iter().map(|c| c.value.clone()).collect();
        let y_max = counts.iter().map(|c| c.count as u32).max().unwrap_or(0) + 1;
        let mut chart = ChartBuilder::on(area)
            .caption(format!("Counts of {name}"), ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(28)
            .y_label_area_size(44)
            .build_cartesian_2d(0f64..labels.len() as f64, 0u32..y_max)
            .map_err(|e| chart_error(path, e))?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|x| {
                labels
                    .get(x.floor() as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()
            .map_err(|e| chart_error(path, e))?;
        chart
            .draw_series(counts.iter().enumerate().map(|(idx, count)| {
                Rectangle::new(
                    [(idx as f64 + 0.15, 0), (idx as f64 + 0.85, count.count as u32)],
                    GREEN.mix(0.5).filled(),
                )
            }))
            .map_err(|e| chart_error(path, e))?;
    }
    root.present().map_err(|e| chart_error(path, e))?;
    debug!(path = %path.display(), panels = panels.len(), "rendered categorical counts");
    Ok(())
}

/// Render grouped cost means, one panel per grouping column.
pub fn render_grouped_means(
    value_column: &str,
    groups: &[(String, Vec<GroupMean>)],
    path: &Path,
) -> Result<()> {
    let panels: Vec<&(String, Vec<GroupMean>)> =
        groups.iter().filter(|(_, g)| !g.is_empty()).collect();
    if panels.is_empty() {
        debug!("no grouped means; skipping comparison chart");
        return Ok(());
    }

    let root = SVGBackend::new(path, (1280, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(path, e))?;
    let (rows, cols) = grid(panels.len());
    let areas = root.split_evenly((rows, cols));
    for ((group_column, means), area) in panels.iter().zip(areas.iter()) {
        let labels: Vec<String> = means.iter().map(|m| m.group.clone()).collect();
        let y_max = means.iter().map(|m| m.mean).fold(0.0f64, f64::max) * 1.1 + 1.0;
        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("Mean {value_column} by {group_column}"),
                ("sans-serif", 18),
            )
            .margin(10)
            .x_label_area_size(28)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..labels.len() as f64, 0f64..y_max)
            .map_err(|e| chart_error(path, e))?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|x| {
                labels
                    .get(x.floor() as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()
            .map_err(|e| chart_error(path, e))?;
        chart
            .draw_series(means.iter().enumerate().map(|(idx, mean)| {
                Rectangle::new(
                    [(idx as f64 + 0.15, 0.0), (idx as f64 + 0.85, mean.mean)],
                    RED.mix(0.5).filled(),
                )
            }))
            .map_err(|e| chart_error(path, e))?;
    }
    root.present().map_err(|e| chart_error(path, e))?;
    debug!(path = %path.display(), panels = panels.len(), "rendered grouped means");
    Ok(())
}
