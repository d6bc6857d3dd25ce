//! Descriptive statistics over the prepared table.
//!
//! All functions here are read-only derived views; none mutates the source
//! table.
//!
//! - **describe**: count/mean/sample-std/min/max per numeric column
//! - **frequency**: value counts per categorical column
//! - **correlation**: Pearson matrix over numeric columns
//! - **grouped**: mean of a numeric column partitioned by a categorical one

pub mod correlation;
pub mod describe;
pub mod frequency;
pub mod grouped;

pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use describe::{NumericSummary, describe};
pub use frequency::{ValueCount, value_counts};
pub use grouped::{GroupMean, grouped_mean};
