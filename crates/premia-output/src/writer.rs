//! Processed-file serialization of the prepared table.

use std::path::Path;

use tracing::info;

use premia_model::{PipelineError, Result, Table};

/// Write the table as a delimited file: header row, no index column, row
/// order preserved.
///
/// Real values keep a decimal point so the output re-ingests with the same
/// column types (see `Column::render_cell`).
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| PipelineError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;

    let write_error = |error: csv::Error| PipelineError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    };

    writer
        .write_record(table.column_names())
        .map_err(write_error)?;
    for row in 0..table.height() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| column.render_cell(row).unwrap_or_default())
            .collect();
        writer.write_record(&record).map_err(write_error)?;
    }
    writer.flush().map_err(|error| PipelineError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    info!(rows = table.height(), path = %path.display(), "wrote processed file");
    Ok(())
}
