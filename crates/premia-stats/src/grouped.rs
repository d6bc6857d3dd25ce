//! Grouped means: a numeric column partitioned by a categorical column.

use std::collections::HashMap;

use premia_model::{PipelineError, Result, Table};

/// Mean of the value column within one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub group: String,
    pub count: usize,
    pub mean: f64,
}

/// Mean of `value_column` partitioned by `group_column`.
///
/// Groups appear in first-observed order. Rows where either cell is missing
/// are skipped, so every reported group has at least one observation.
///
/// # Errors
///
/// `ColumnNotFound` when either column is absent; `ColumnNotNumeric` when
/// the value column holds categorical data.
pub fn grouped_mean(
    table: &Table,
    value_column: &str,
    group_column: &str,
) -> Result<Vec<GroupMean>> {
    let values = table
        .column(value_column)
        .ok_or_else(|| PipelineError::ColumnNotFound(value_column.to_string()))?
        .numeric_values()
        .ok_or_else(|| PipelineError::ColumnNotNumeric(value_column.to_string()))?;
    let groups = table
        .column(group_column)
        .ok_or_else(|| PipelineError::ColumnNotFound(group_column.to_string()))?;

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for (row, value) in values.iter().enumerate() {
        let (Some(value), Some(group)) = (value, groups.render_cell(row)) else {
            continue;
        };
        if !sums.contains_key(&group) {
            order.push(group.clone());
        }
        let entry = sums.entry(group).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    Ok(order
        .into_iter()
        .map(|group| {
            let (sum, count) = sums[&group];
            GroupMean {
                group,
                count,
                mean: sum / count as f64,
            }
        })
        .collect())
}
