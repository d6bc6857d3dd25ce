//! Round-trip: writing the enforced table and reading it back yields an
//! equal table (names, types, row values, ordering).

use premia_ingest::read_csv;
use premia_model::{Column, ColumnData, Table};
use premia_output::write_csv;

#[test]
fn csv_round_trip_preserves_names_types_and_values() {
    let table = Table::new(vec![
        Column::new("Age", ColumnData::Integer(vec![Some(19), Some(33), None])),
        Column::new(
            "Insurance_Cost",
            ColumnData::Real(vec![Some(16884.92), Some(0.0), Some(4449.46)]),
        ),
        Column::new(
            "Smoker",
            ColumnData::Categorical(vec![
                Some("yes".to_string()),
                Some("no".to_string()),
                Some("no".to_string()),
            ]),
        ),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processed.csv");
    write_csv(&table, &path).unwrap();
    let read_back = read_csv(&path).unwrap();

    assert_eq!(read_back, table);
}

#[test]
fn whole_real_values_stay_real_through_the_round_trip() {
    // 200.0 must not re-ingest as an integer column.
    let table = Table::new(vec![Column::new(
        "Cost",
        ColumnData::Real(vec![Some(200.0), Some(100.0)]),
    )]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("real.csv");
    write_csv(&table, &path).unwrap();
    let read_back = read_csv(&path).unwrap();
    assert_eq!(read_back, table);
}
