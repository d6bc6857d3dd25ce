//! Shared data model for the premia pipeline.
//!
//! - **table**: ordered typed-column [`Table`] with missing-cell support
//! - **error**: the pipeline failure taxonomy

pub mod error;
pub mod table;

pub use error::{PipelineError, Result};
pub use table::{Column, ColumnData, ColumnType, Table};
