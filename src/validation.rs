//! Input validation for process sets.
//!
//! Checks structural integrity of a process set before any simulator
//! runs. Detects:
//! - Empty process sets
//! - Non-positive burst times
//! - Negative arrival times
//! - The reserved pid `0`
//! - Duplicate pids
//! - Schedules whose last instant would not fit in an `i64`
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process requires zero or negative CPU time.
    InvalidBurstTime,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process uses the reserved pid 0.
    InvalidPid,
    /// Two processes share the same pid.
    DuplicatePid,
    /// Latest arrival plus total burst exceeds the `i64` time range.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every burst time is positive
/// 3. Every arrival time is non-negative
/// 4. No pid is 0
/// 5. No duplicate pids
/// 6. `max(arrival) + sum(burst)` fits in an `i64`. No schedule of the set
///    can end later, so every clock value stays representable.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if p.pid.get() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Pid 0 is reserved",
            ));
        }

        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("{} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("{} arrives before t=0 ({})", p.pid, p.arrival_time),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the i64 time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the makespan of any schedule of `processes`, or `None`
/// when it overflows.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))?;
    latest_arrival.checked_add(total_burst)
}
