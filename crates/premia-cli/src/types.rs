//! Result types shared between command execution and summary rendering.

use std::path::PathBuf;

use premia_stats::{CorrelationMatrix, GroupMean, NumericSummary, ValueCount};
use premia_transform::{ClampedValue, Rename};

/// Files produced by a run.
#[derive(Debug, Default)]
pub struct RunOutputs {
    pub processed_csv: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub charts: Vec<PathBuf>,
}

/// Everything a run produced, for summary rendering and exit-code decisions.
#[derive(Debug)]
pub struct RunOutcome {
    pub rows: usize,
    pub cost_column: String,
    pub renames: Vec<Rename>,
    pub clamped: Vec<ClampedValue>,
    pub numeric: Vec<NumericSummary>,
    pub frequencies: Vec<(String, Vec<ValueCount>)>,
    pub correlation: CorrelationMatrix,
    pub grouped: Vec<(String, Vec<GroupMean>)>,
    pub outputs: RunOutputs,
    /// Sink failures reported after the in-memory pipeline completed.
    pub errors: Vec<String>,
}

impl RunOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
