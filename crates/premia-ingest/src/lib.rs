//! CSV ingestion for the premia pipeline.
//!
//! - **reader**: delimited-file reading (trimming, BOM handling, ragged rows)
//! - **infer**: per-column type inference into {Integer, Real, Categorical}

pub mod infer;
pub mod reader;

pub use infer::{build_column_data, infer_column_type};
pub use reader::read_csv;
