//! Integration tests for CSV ingestion.

use premia_ingest::read_csv;
use premia_model::{ColumnData, ColumnType};

const SAMPLE: &str = "\
Age,BMI,Number of Children,Smoker,Region,Insurance Cost ($)
19,27.9,0,yes,southwest,16884.92
33,22.705,1,no,northwest,-1725.55
28,33.0,3,no,southeast,4449.46
";

#[test]
fn ingests_insurance_shaped_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insurance.csv");
    std::fs::write(&path, SAMPLE).unwrap();

    let table = read_csv(&path).unwrap();
    assert_eq!(table.height(), 3);
    assert_eq!(
        table.column_names(),
        vec![
            "Age",
            "BMI",
            "Number of Children",
            "Smoker",
            "Region",
            "Insurance Cost ($)"
        ]
    );
    assert_eq!(
        table.column("Age").unwrap().column_type(),
        ColumnType::Integer
    );
    assert_eq!(table.column("BMI").unwrap().column_type(), ColumnType::Real);
    assert_eq!(
        table.column("Smoker").unwrap().column_type(),
        ColumnType::Categorical
    );

    // Negative costs are valid input at ingestion time.
    let cost = table.column("Insurance Cost ($)").unwrap();
    match &cost.data {
        ColumnData::Real(values) => {
            assert_eq!(values[1], Some(-1725.55));
        }
        other => panic!("expected real cost column, got {other:?}"),
    }
}

#[test]
fn empty_data_yields_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "Age,Smoker\n").unwrap();

    let table = read_csv(&path).unwrap();
    assert_eq!(table.height(), 0);
    assert_eq!(table.width(), 2);
}
