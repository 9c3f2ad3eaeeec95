//! Error types for simulation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the simulators and the metrics aggregator.
///
/// All of them are caller errors; nothing here is transient or retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The process set failed validation. Carries every detected problem.
    #[error("invalid process set: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Round Robin quantum must be at least 1.
    #[error("invalid quantum {0}: must be >= 1")]
    InvalidQuantum(i64),

    /// Averages over zero processes are undefined.
    #[error("process set is empty")]
    EmptyProcessSet,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
