use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for a pipeline run.
///
/// Every variant names the stage that produced it; nothing in the pipeline
/// fails silently.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error(
        "schema collision: columns {first:?} and {second:?} both normalize to {normalized:?}"
    )]
    SchemaCollision {
        first: String,
        second: String,
        normalized: String,
    },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column is not numeric: {0}")]
    ColumnNotNumeric(String),

    #[error("persistence failure: {message}")]
    Persistence { message: String },
}

impl PipelineError {
    /// Build a `Persistence` error from a sink operation and its cause.
    pub fn persistence(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::Persistence {
            message: format!("{operation}: {cause}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
