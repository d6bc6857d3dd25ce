//! Typed-column table model.
//!
//! A [`Table`] is an ordered sequence of named, typed columns; rows are kept
//! in insertion order end-to-end. The column type tag is decided once at
//! ingestion and never re-inferred downstream.

/// Per-column type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnType {
    Integer,
    Real,
    Categorical,
}

/// Column storage. `None` is a missing cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ColumnData {
    Integer(Vec<Option<i64>>),
    Real(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(values) => values.len(),
            Self::Real(values) => values.len(),
            Self::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Integer(_) => ColumnType::Integer,
            Self::Real(_) => ColumnType::Real,
            Self::Categorical(_) => ColumnType::Categorical,
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.column_type(), ColumnType::Integer | ColumnType::Real)
    }

    /// Numeric view of the column, widening Integer to f64.
    ///
    /// Returns `None` for categorical columns.
    pub fn numeric_values(&self) -> Option<Vec<Option<f64>>> {
        match &self.data {
            ColumnData::Integer(values) => {
                Some(values.iter().map(|v| v.map(|n| n as f64)).collect())
            }
            ColumnData::Real(values) => Some(values.clone()),
            ColumnData::Categorical(_) => None,
        }
    }

    /// Render one cell for serialization; `None` for a missing cell.
    ///
    /// Real values keep their decimal point (`200.0`, not `200`) so a
    /// re-ingest of the output infers the same column type.
    pub fn render_cell(&self, row: usize) -> Option<String> {
        match &self.data {
            ColumnData::Integer(values) => values.get(row)?.map(|v| v.to_string()),
            ColumnData::Real(values) => values.get(row)?.map(|v| format!("{v:?}")),
            ColumnData::Categorical(values) => values.get(row)?.clone(),
        }
    }
}

/// Ordered columns, ordered rows: the pipeline's primary data unit.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }

    pub fn categorical_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.column_type() == ColumnType::Categorical)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new("Age", ColumnData::Integer(vec![Some(34), Some(61), None])),
            Column::new(
                "Cost",
                ColumnData::Real(vec![Some(120.5), Some(-30.0), Some(0.0)]),
            ),
            Column::new(
                "Smoker",
                ColumnData::Categorical(vec![
                    Some("yes".to_string()),
                    Some("no".to_string()),
                    None,
                ]),
            ),
        ])
    }

    #[test]
    fn dimensions_and_lookup() {
        let table = sample_table();
        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 3);
        assert!(table.column("Cost").is_some());
        assert!(table.column("cost").is_none());
        assert_eq!(table.numeric_columns().len(), 2);
        assert_eq!(table.categorical_columns().len(), 1);
    }

    #[test]
    fn numeric_values_widen_integers() {
        let table = sample_table();
        let age = table.column("Age").unwrap();
        assert_eq!(
            age.numeric_values().unwrap(),
            vec![Some(34.0), Some(61.0), None]
        );
        assert!(table.column("Smoker").unwrap().numeric_values().is_none());
    }

    #[test]
    fn render_cell_keeps_real_decimal_point() {
        let table = sample_table();
        let cost = table.column("Cost").unwrap();
        assert_eq!(cost.render_cell(2), Some("0.0".to_string()));
        let age = table.column("Age").unwrap();
        assert_eq!(age.render_cell(0), Some("34".to_string()));
        assert_eq!(age.render_cell(2), None);
    }
}
