//! Per-column type inference over raw string cells.
//!
//! Types are decided once here, at ingestion time; downstream stages only
//! ever see the explicit tag. Empty cells are missing and carry no type
//! information.

use premia_model::{ColumnData, ColumnType};

/// Infer the type of a column from its raw cells.
///
/// All non-missing cells parse as `i64` → Integer; otherwise all parse as
/// `f64` → Real; otherwise Categorical. A column with no non-missing cells
/// is Categorical.
pub fn infer_column_type(cells: &[String]) -> ColumnType {
    let mut saw_value = false;
    let mut all_integer = true;
    let mut all_real = true;
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        saw_value = true;
        if all_integer && cell.parse::<i64>().is_err() {
            all_integer = false;
        }
        if all_real && cell.parse::<f64>().is_err() {
            all_real = false;
        }
        if !all_real {
            break;
        }
    }
    if !saw_value {
        ColumnType::Categorical
    } else if all_integer {
        ColumnType::Integer
    } else if all_real {
        ColumnType::Real
    } else {
        ColumnType::Categorical
    }
}

/// Materialize raw cells into typed storage for the inferred type.
pub fn build_column_data(cells: Vec<String>, column_type: ColumnType) -> ColumnData {
    match column_type {
        ColumnType::Integer => {
            ColumnData::Integer(cells.iter().map(|cell| cell.parse::<i64>().ok()).collect())
        }
        ColumnType::Real => {
            ColumnData::Real(cells.iter().map(|cell| cell.parse::<f64>().ok()).collect())
        }
        ColumnType::Categorical => ColumnData::Categorical(
            cells
                .into_iter()
                .map(|cell| if cell.is_empty() { None } else { Some(cell) })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn integers_infer_integer() {
        assert_eq!(
            infer_column_type(&cells(&["1", "42", "-7"])),
            ColumnType::Integer
        );
    }

    #[test]
    fn decimal_point_forces_real() {
        assert_eq!(
            infer_column_type(&cells(&["1", "42.0", "-7"])),
            ColumnType::Real
        );
    }

    #[test]
    fn text_forces_categorical() {
        assert_eq!(
            infer_column_type(&cells(&["1", "yes", "-7"])),
            ColumnType::Categorical
        );
    }

    #[test]
    fn missing_cells_carry_no_type_information() {
        assert_eq!(
            infer_column_type(&cells(&["", "3", ""])),
            ColumnType::Integer
        );
        assert_eq!(infer_column_type(&cells(&["", "", ""])), ColumnType::Categorical);
    }

    #[test]
    fn build_integer_data_keeps_missing() {
        let data = build_column_data(cells(&["4", "", "-2"]), ColumnType::Integer);
        assert_eq!(data, ColumnData::Integer(vec![Some(4), None, Some(-2)]));
    }
}
