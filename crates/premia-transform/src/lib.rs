//! Transform stages for the premia pipeline.
//!
//! - **normalize**: map arbitrary column names to storage-safe identifiers
//! - **enforce**: clamp the cost column to the non-negative domain
//! - **pipeline**: sequence the stages for one run

pub mod enforce;
pub mod normalize;
pub mod pipeline;

pub use enforce::{ClampedValue, clamp_non_negative};
pub use normalize::{Rename, normalize_columns, normalize_name};
pub use pipeline::{PipelineConfig, PipelineRun, run_pipeline};
