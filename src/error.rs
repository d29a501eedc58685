//! Error types shared by every solver.
//!
//! All errors are detected eagerly, before any solver work starts, and abort
//! the run without a partial [`Selection`](crate::Selection).

use thiserror::Error;

use crate::pool::ValidationError;

/// Convenience alias used throughout the crate.
pub type SolveResult<T> = Result<T, SolveError>;

/// Failure of a solver invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The case pool is malformed or inconsistent.
    ///
    /// Carries every problem found, not just the first.
    #[error("invalid case pool: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A parameter is out of range or nonsensical.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The DP table would exceed the configured cell bound.
    ///
    /// Lower the resolution granularity or apply a pre-filter.
    #[error("dp table of {cells} cells exceeds the limit of {max_cells}")]
    Capacity {
        /// Cells the table would need.
        cells: u128,
        /// Configured maximum.
        max_cells: u64,
    },

    /// The run was stopped through its cancellation token.
    #[error("solver cancelled")]
    Cancelled,
}

impl SolveError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SolveError::Config(message.into())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
