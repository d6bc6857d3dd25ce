//! Value-frequency tables for categorical columns.

use std::collections::HashMap;

use premia_model::{PipelineError, Result, Table};

/// One distinct observed value and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Count distinct observed values in the named column.
///
/// Ordered by descending count; ties keep first-observed order. Missing
/// cells are not counted. Works on any column type; numeric cells are
/// counted by their rendered text.
///
/// # Errors
///
/// `ColumnNotFound` when the column is absent.
pub fn value_counts(table: &Table, column: &str) -> Result<Vec<ValueCount>> {
    let target = table
        .column(column)
        .ok_or_else(|| PipelineError::ColumnNotFound(column.to_string()))?;

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in 0..target.len() {
        let Some(value) = target.render_cell(row) else {
            continue;
        };
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut result: Vec<ValueCount> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            ValueCount { value, count }
        })
        .collect();
    // Stable sort keeps first-observed order within equal counts.
    result.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_model::{Column, ColumnData};

    fn smoker_table(values: &[&str]) -> Table {
        Table::new(vec![Column::new(
            "Smoker",
            ColumnData::Categorical(values.iter().map(|v| Some((*v).to_string())).collect()),
        )])
    }

    #[test]
    fn counts_ordered_by_descending_frequency() {
        let table = smoker_table(&["yes", "no", "yes", "yes"]);
        let counts = value_counts(&table, "Smoker").unwrap();
        assert_eq!(
            counts,
            vec![
                ValueCount {
                    value: "yes".to_string(),
                    count: 3
                },
                ValueCount {
                    value: "no".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_observed_order() {
        let table = smoker_table(&["b", "a", "b", "a", "c"]);
        let counts = value_counts(&table, "Smoker").unwrap();
        let values: Vec<&str> = counts.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_cells_are_not_counted() {
        let table = Table::new(vec![Column::new(
            "Region",
            ColumnData::Categorical(vec![Some("west".to_string()), None, None]),
        )]);
        let counts = value_counts(&table, "Region").unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 1);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let table = smoker_table(&["yes"]);
        assert!(matches!(
            value_counts(&table, "Gender").unwrap_err(),
            PipelineError::ColumnNotFound(_)
        ));
    }
}
