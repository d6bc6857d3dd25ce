//! Schema normalization: storage-safe column identifiers.

use std::collections::HashMap;

use premia_model::{Column, PipelineError, Result, Table};

/// A column rename applied during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub original: String,
    pub normalized: String,
}

/// Normalize one column name.
///
/// Every character that is not ASCII alphanumeric becomes `_`. Substitution
/// is character-for-character: consecutive replacements are not collapsed
/// and leading/trailing underscores are kept.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

/// Normalize every column name in the table.
///
/// Row data and column order are untouched. Returns the renamed table along
/// with the list of names that actually changed.
///
/// # Errors
///
/// `SchemaCollision` when two distinct input names normalize to the same
/// identifier; merging columns silently would hide a data-quality defect.
pub fn normalize_columns(table: &Table) -> Result<(Table, Vec<Rename>)> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut columns = Vec::with_capacity(table.width());
    let mut renames = Vec::new();
    for column in &table.columns {
        let normalized = normalize_name(&column.name);
        if let Some(first) = seen.get(&normalized) {
            return Err(PipelineError::SchemaCollision {
                first: first.clone(),
                second: column.name.clone(),
                normalized,
            });
        }
        seen.insert(normalized.clone(), column.name.clone());
        if normalized != column.name {
            renames.push(Rename {
                original: column.name.clone(),
                normalized: normalized.clone(),
            });
        }
        columns.push(Column::new(normalized, column.data.clone()));
    }
    Ok((Table::new(columns), renames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_model::ColumnData;

    fn table_with_names(names: &[&str]) -> Table {
        Table::new(
            names
                .iter()
                .map(|name| Column::new(*name, ColumnData::Integer(vec![Some(1)])))
                .collect(),
        )
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(normalize_name("Number of Children"), "Number_of_Children");
    }

    #[test]
    fn symbols_are_substituted_without_collapsing() {
        assert_eq!(normalize_name("Insurance Cost ($)"), "Insurance_Cost____");
        assert_eq!(normalize_name(" lead"), "_lead");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_name("Cost (USD)");
        assert_eq!(normalize_name(&once), once);

        let table = table_with_names(&["A b", "C-d"]);
        let (normalized, renames) = normalize_columns(&table).unwrap();
        assert_eq!(renames.len(), 2);
        let (again, renames_again) = normalize_columns(&normalized).unwrap();
        assert_eq!(again, normalized);
        assert!(renames_again.is_empty());
    }

    #[test]
    fn collision_is_an_error() {
        let table = table_with_names(&["a b", "a-b"]);
        let error = normalize_columns(&table).unwrap_err();
        match error {
            PipelineError::SchemaCollision {
                first,
                second,
                normalized,
            } => {
                assert_eq!(first, "a b");
                assert_eq!(second, "a-b");
                assert_eq!(normalized, "a_b");
            }
            other => panic!("expected SchemaCollision, got {other}"),
        }
    }

    #[test]
    fn row_data_and_order_are_preserved() {
        let table = Table::new(vec![
            Column::new("B col", ColumnData::Integer(vec![Some(2), Some(4)])),
            Column::new("A col", ColumnData::Integer(vec![Some(1), Some(3)])),
        ]);
        let (normalized, _) = normalize_columns(&table).unwrap();
        assert_eq!(normalized.column_names(), vec!["B_col", "A_col"]);
        assert_eq!(normalized.columns[0].data, table.columns[0].data);
        assert_eq!(normalized.height(), table.height());
    }
}
