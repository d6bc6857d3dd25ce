//! Per-column descriptive statistics for numeric columns.

use premia_model::{Column, Table};

/// Moments and extremes for one numeric column.
///
/// `count` is the number of non-missing values. Moments are `None` when
/// undefined: mean/min/max need at least one value, the sample standard
/// deviation needs at least two. An empty table is representable, never an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize every numeric column of the table, in column order.
pub fn describe(table: &Table) -> Vec<NumericSummary> {
    table
        .numeric_columns()
        .into_iter()
        .map(summarize_column)
        .collect()
}

fn summarize_column(column: &Column) -> NumericSummary {
    let values: Vec<f64> = column
        .numeric_values()
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect();
    let count = values.len();
    let mean = if count == 0 {
        None
    } else {
        Some(values.iter().sum::<f64>() / count as f64)
    };
    // Sample standard deviation (divisor n-1); dispersion of a single
    // observation is undefined, not zero.
    let std = match (mean, count) {
        (Some(mean), n) if n >= 2 => {
            let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            Some((sum_sq / (n - 1) as f64).sqrt())
        }
        _ => None,
    };
    let min = values.iter().copied().fold(None, |acc: Option<f64>, v| {
        Some(acc.map_or(v, |a| a.min(v)))
    });
    let max = values.iter().copied().fold(None, |acc: Option<f64>, v| {
        Some(acc.map_or(v, |a| a.max(v)))
    });
    NumericSummary {
        column: column.name.clone(),
        count,
        mean,
        std,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_model::ColumnData;

    #[test]
    fn moments_over_known_values() {
        let table = Table::new(vec![Column::new(
            "cost",
            ColumnData::Real(vec![Some(100.0), Some(300.0), Some(500.0), None]),
        )]);
        let summaries = describe(&table);
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.count, 3);
        assert_eq!(s.mean, Some(300.0));
        assert_eq!(s.std, Some(200.0));
        assert_eq!(s.min, Some(100.0));
        assert_eq!(s.max, Some(500.0));
    }

    #[test]
    fn single_value_has_undefined_dispersion() {
        let table = Table::new(vec![Column::new(
            "cost",
            ColumnData::Real(vec![Some(42.0)]),
        )]);
        let s = &describe(&table)[0];
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, Some(42.0));
        assert_eq!(s.std, None);
    }

    #[test]
    fn empty_column_is_representable() {
        let table = Table::new(vec![Column::new("cost", ColumnData::Real(vec![]))]);
        let s = &describe(&table)[0];
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, None);
        assert_eq!(s.min, None);
        assert_eq!(s.max, None);
    }

    #[test]
    fn categorical_columns_are_skipped() {
        let table = Table::new(vec![Column::new(
            "region",
            ColumnData::Categorical(vec![Some("west".to_string())]),
        )]);
        assert!(describe(&table).is_empty());
    }
}
