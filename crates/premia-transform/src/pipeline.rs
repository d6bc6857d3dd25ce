//! Pipeline orchestration: Normalizer → Enforcer.
//!
//! Each stage consumes one table and produces another; nothing reorders,
//! invents, or drops rows, so row count in equals row count out at every
//! stage.

use tracing::{info, warn};

use premia_model::{Result, Table};

use crate::enforce::{ClampedValue, clamp_non_negative};
use crate::normalize::{Rename, normalize_columns, normalize_name};

/// Explicit configuration for one pipeline run; nothing is process-wide.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Cost column to enforce. Accepted in raw or normalized spelling.
    pub cost_column: String,
}

/// Outcome of one run: the prepared table plus stage diagnostics.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub table: Table,
    pub renames: Vec<Rename>,
    pub clamped: Vec<ClampedValue>,
}

/// Run Normalizer → Enforcer over an ingested table.
///
/// The returned table is schema-valid and satisfies the non-negative cost
/// invariant; diagnostics record every rename and every clamped cell.
pub fn run_pipeline(table: &Table, config: &PipelineConfig) -> Result<PipelineRun> {
    let rows_in = table.height();

    let (normalized, renames) = normalize_columns(table)?;
    info!(
        columns = normalized.width(),
        renamed = renames.len(),
        "normalized column names"
    );

    let cost_column = normalize_name(&config.cost_column);
    let (enforced, clamped) = clamp_non_negative(&normalized, &cost_column)?;
    if clamped.is_empty() {
        info!(column = %cost_column, "no negative cost values found");
    } else {
        warn!(
            column = %cost_column,
            count = clamped.len(),
            "clamped negative cost values to zero"
        );
    }

    debug_assert_eq!(enforced.height(), rows_in);
    Ok(PipelineRun {
        table: enforced,
        renames,
        clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_model::{Column, ColumnData};

    fn config() -> PipelineConfig {
        PipelineConfig {
            cost_column: "Insurance Cost".to_string(),
        }
    }

    fn input_table() -> Table {
        Table::new(vec![
            Column::new(
                "Number of Children",
                ColumnData::Integer(vec![Some(0), Some(2), Some(1)]),
            ),
            Column::new(
                "Insurance Cost",
                ColumnData::Real(vec![Some(-500.0), Some(200.0), Some(0.0)]),
            ),
        ])
    }

    #[test]
    fn stages_run_in_order() {
        let run = run_pipeline(&input_table(), &config()).unwrap();
        assert_eq!(
            run.table.column_names(),
            vec!["Number_of_Children", "Insurance_Cost"]
        );
        assert_eq!(
            run.table.column("Insurance_Cost").unwrap().data,
            ColumnData::Real(vec![Some(0.0), Some(200.0), Some(0.0)])
        );
        assert_eq!(run.renames.len(), 2);
        assert_eq!(run.clamped.len(), 1);
        assert_eq!(run.clamped[0].row, 0);
    }

    #[test]
    fn cost_column_accepts_normalized_spelling() {
        let table = input_table();
        let run = run_pipeline(
            &table,
            &PipelineConfig {
                cost_column: "Insurance_Cost".to_string(),
            },
        )
        .unwrap();
        assert_eq!(run.clamped.len(), 1);
    }

    #[test]
    fn row_count_is_preserved() {
        let table = input_table();
        let run = run_pipeline(&table, &config()).unwrap();
        assert_eq!(run.table.height(), table.height());
    }

    #[test]
    fn missing_cost_column_halts_the_stage() {
        let run = run_pipeline(
            &input_table(),
            &PipelineConfig {
                cost_column: "Premium".to_string(),
            },
        );
        assert!(run.is_err());
    }
}
