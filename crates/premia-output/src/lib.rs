//! Sinks for the prepared table.
//!
//! - **writer**: processed delimited file (round-trips through ingestion)
//! - **sqlite**: relational sink with replace/append modes
//! - **charts**: SVG summary artifacts

pub mod charts;
pub mod sqlite;
pub mod writer;

pub use charts::{render_categorical_counts, render_grouped_means, render_numeric_distributions};
pub use sqlite::{SqliteSink, WriteMode};
pub use writer::write_csv;
