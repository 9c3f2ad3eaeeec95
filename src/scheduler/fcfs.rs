//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival_time, pid)`.
//! 2. Walk the sorted list; if the clock precedes the next arrival, record
//!    an idle gap and jump to it.
//! 3. Run each process to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use crate::error::Result;
use crate::logging::VERBOSITY_SILENT;
use crate::models::Process;

use super::state::WorkingSet;
use super::{Algorithm, CpuScheduler, SimulationResult};

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use u_cpusim::models::Process;
/// use u_cpusim::scheduler::{CpuScheduler, Fcfs};
///
/// let procs = Process::from_times(&[0, 1, 2], &[5, 3, 8]);
/// let result = Fcfs::new().simulate(&procs).unwrap();
/// let ct: Vec<i64> = result.processes.iter().map(|m| m.completion_time).collect();
/// assert_eq!(ct, vec![5, 8, 16]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    verbosity: u8,
}

impl Fcfs {
    /// Creates a silent FCFS scheduler.
    pub fn new() -> Self {
        Self {
            verbosity: VERBOSITY_SILENT,
        }
    }

    /// Sets the logging verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult> {
        let mut state = WorkingSet::new(processes, self.verbosity)?;
        state.sort_by_arrival();

        for idx in 0..state.len() {
            let (arrival, burst) = {
                let p = state.process(idx);
                (p.arrival_time, p.burst_time)
            };
            state.idle_until(arrival);
            state.run(idx, burst);
        }

        Ok(state.into_result(Algorithm::Fcfs))
    }
}
