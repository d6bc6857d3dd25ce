//! Cost invariant enforcement: clamp a numeric column at zero.
//!
//! A negative cost is a recoverable measurement defect, not invalid data to
//! discard, so the value is clamped rather than the row dropped: row count
//! is preserved and every correction is reported for audit.

use premia_model::{Column, ColumnData, PipelineError, Result, Table};

/// One clamped cell: which row changed and what it held before.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedValue {
    pub row: usize,
    pub original: f64,
}

/// Replace every value in the named numeric column with `max(0, value)`.
///
/// Returns the corrected table and the audit diagnostic. A column without
/// negatives yields an empty diagnostic and an unchanged table. Missing
/// cells stay missing.
///
/// # Errors
///
/// `ColumnNotFound` when the column is absent; `ColumnNotNumeric` when it
/// holds categorical data.
pub fn clamp_non_negative(table: &Table, column: &str) -> Result<(Table, Vec<ClampedValue>)> {
    let target = table
        .column(column)
        .ok_or_else(|| PipelineError::ColumnNotFound(column.to_string()))?;

    let mut clamped = Vec::new();
    let data = match &target.data {
        ColumnData::Integer(values) => ColumnData::Integer(
            values
                .iter()
                .enumerate()
                .map(|(row, value)| {
                    value.map(|v| {
                        if v < 0 {
                            clamped.push(ClampedValue {
                                row,
                                original: v as f64,
                            });
                            0
                        } else {
                            v
                        }
                    })
                })
                .collect(),
        ),
        ColumnData::Real(values) => ColumnData::Real(
            values
                .iter()
                .enumerate()
                .map(|(row, value)| {
                    value.map(|v| {
                        if v < 0.0 {
                            clamped.push(ClampedValue { row, original: v });
                            0.0
                        } else {
                            v
                        }
                    })
                })
                .collect(),
        ),
        ColumnData::Categorical(_) => {
            return Err(PipelineError::ColumnNotNumeric(column.to_string()));
        }
    };

    let columns = table
        .columns
        .iter()
        .map(|c| {
            if c.name == column {
                Column::new(c.name.clone(), data.clone())
            } else {
                c.clone()
            }
        })
        .collect();
    Ok((Table::new(columns), clamped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost_table(values: Vec<Option<f64>>) -> Table {
        Table::new(vec![Column::new("cost", ColumnData::Real(values))])
    }

    #[test]
    fn negatives_clamp_to_zero_with_diagnostic() {
        let table = cost_table(vec![Some(-500.0), Some(200.0), Some(0.0)]);
        let (enforced, clamped) = clamp_non_negative(&table, "cost").unwrap();
        assert_eq!(
            enforced.column("cost").unwrap().data,
            ColumnData::Real(vec![Some(0.0), Some(200.0), Some(0.0)])
        );
        assert_eq!(
            clamped,
            vec![ClampedValue {
                row: 0,
                original: -500.0
            }]
        );
    }

    #[test]
    fn clean_column_is_unchanged() {
        let table = cost_table(vec![Some(1.5), None, Some(0.0)]);
        let (enforced, clamped) = clamp_non_negative(&table, "cost").unwrap();
        assert!(clamped.is_empty());
        assert_eq!(enforced, table);
    }

    #[test]
    fn integer_columns_clamp_too() {
        let table = Table::new(vec![Column::new(
            "cost",
            ColumnData::Integer(vec![Some(-3), Some(7), None]),
        )]);
        let (enforced, clamped) = clamp_non_negative(&table, "cost").unwrap();
        assert_eq!(
            enforced.column("cost").unwrap().data,
            ColumnData::Integer(vec![Some(0), Some(7), None])
        );
        assert_eq!(clamped.len(), 1);
        assert_eq!(clamped[0].original, -3.0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = cost_table(vec![Some(1.0)]);
        assert!(matches!(
            clamp_non_negative(&table, "price").unwrap_err(),
            PipelineError::ColumnNotFound(_)
        ));
    }

    #[test]
    fn categorical_column_is_rejected() {
        let table = Table::new(vec![Column::new(
            "region",
            ColumnData::Categorical(vec![Some("west".to_string())]),
        )]);
        assert!(matches!(
            clamp_non_negative(&table, "region").unwrap_err(),
            PipelineError::ColumnNotNumeric(_)
        ));
    }
}
