//! Configuration types for simulation runs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SimulationError};
use crate::logging::VERBOSITY_SILENT;

/// Round Robin time slice.
///
/// Always at least 1, so every dispatch makes progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantum(i64);

impl Quantum {
    /// Substituted for non-positive quanta by [`Quantum::or_default`].
    pub const DEFAULT: Quantum = Quantum(2);

    /// Creates a quantum, rejecting values below 1.
    pub fn new(raw: i64) -> Result<Self> {
        if raw >= 1 {
            Ok(Self(raw))
        } else {
            Err(SimulationError::InvalidQuantum(raw))
        }
    }

    /// Creates a quantum, substituting [`Quantum::DEFAULT`] for values below 1.
    pub fn or_default(raw: i64) -> Self {
        Self::new(raw).unwrap_or(Self::DEFAULT)
    }

    /// Slice length in time units.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Quantum {
    type Error = SimulationError;

    fn try_from(raw: i64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Quantum> for i64 {
    fn from(q: Quantum) -> Self {
        q.0
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How SJF orders ready processes with equal burst times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SjfTieBreak {
    /// Earlier arrival first, then lower pid.
    #[default]
    ArrivalThenPid,
    /// First in the caller's input order, which need not match arrival
    /// order. On arrival-sorted input this picks the earliest arrival,
    /// like [`SjfTieBreak::ArrivalThenPid`].
    InputOrder,
}

/// Configuration for a simulation session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time slice.
    pub quantum: Quantum,
    /// Tie-break among equal bursts for SJF.
    pub sjf_tie_break: SjfTieBreak,
    /// Logging verbosity (0-3), see [`crate::logging`].
    pub verbosity: u8,
}

impl SimulationConfig {
    /// Creates the default configuration (quantum 2, silent).
    pub fn new() -> Self {
        Self {
            quantum: Quantum::DEFAULT,
            sjf_tie_break: SjfTieBreak::default(),
            verbosity: VERBOSITY_SILENT,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the quantum from raw user input, falling back to the default
    /// for values below 1.
    pub fn with_raw_quantum(mut self, raw: i64) -> Self {
        self.quantum = Quantum::or_default(raw);
        self
    }

    /// Sets the SJF tie-break policy.
    pub fn with_sjf_tie_break(mut self, tie_break: SjfTieBreak) -> Self {
        self.sjf_tie_break = tie_break;
        self
    }

    /// Sets the logging verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}
