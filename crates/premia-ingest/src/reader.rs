//! Delimited-file reading into the typed table model.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use premia_model::{Column, PipelineError, Result, Table};

use crate::infer::{build_column_data, infer_column_type};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Read a delimited file with a header row into a [`Table`].
///
/// Cells are trimmed; empty cells become missing. Each column's type is
/// inferred from its cells (see [`crate::infer`]). Rows shorter than the
/// header are padded with missing cells.
///
/// # Errors
///
/// `InputNotFound` when the path does not exist; `Read` when the file
/// cannot be parsed.
pub fn read_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| PipelineError::Read {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| PipelineError::Read {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|error| PipelineError::Read {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record.get(idx).unwrap_or("");
            column.push(normalize_cell(value));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| {
            let column_type = infer_column_type(&raw);
            debug!(column = %name, ?column_type, "inferred column type");
            Column::new(name, build_column_data(raw, column_type))
        })
        .collect();

    let table = Table::new(columns);
    debug!(
        rows = table.height(),
        columns = table.width(),
        path = %path.display(),
        "ingested delimited file"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_model::ColumnType;

    fn write_temp(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let error = read_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(error, PipelineError::InputNotFound { .. }));
    }

    #[test]
    fn header_bom_is_stripped() {
        let (_dir, path) = write_temp("\u{feff}Age,Smoker\n30,yes\n");
        let table = read_csv(&path).unwrap();
        assert_eq!(table.column_names(), vec!["Age", "Smoker"]);
    }

    #[test]
    fn short_rows_are_padded_with_missing() {
        let (_dir, path) = write_temp("A,B\n1,2\n3\n");
        let table = read_csv(&path).unwrap();
        assert_eq!(table.height(), 2);
        let b = table.column("B").unwrap();
        assert_eq!(b.render_cell(1), None);
    }

    #[test]
    fn types_are_inferred_per_column() {
        let (_dir, path) = write_temp("Age,BMI,Smoker\n30,22.5,yes\n41,31.0,no\n");
        let table = read_csv(&path).unwrap();
        assert_eq!(
            table.column("Age").unwrap().column_type(),
            ColumnType::Integer
        );
        assert_eq!(table.column("BMI").unwrap().column_type(), ColumnType::Real);
        assert_eq!(
            table.column("Smoker").unwrap().column_type(),
            ColumnType::Categorical
        );
    }
}
