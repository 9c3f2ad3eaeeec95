//! Shortest-Job-First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Among unfinished processes with `arrival_time <= clock`, pick the one
//!    with the smallest burst time.
//! 2. If none has arrived, record an idle gap up to the earliest pending
//!    arrival and retry.
//! 3. Run the selected process to completion; a shorter job arriving
//!    mid-run does not preempt it.
//!
//! Ties on burst time are broken by [`SjfTieBreak`].
//!
//! # Complexity
//! O(n^2): n selections, each scanning the arena.
//!
//! # Reference
//! Smith (1956), shortest processing time minimizes mean flow time on a
//! single machine.

use crate::config::SjfTieBreak;
use crate::error::Result;
use crate::logging::VERBOSITY_SILENT;
use crate::models::Process;

use super::state::WorkingSet;
use super::{Algorithm, CpuScheduler, SimulationResult};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Default)]
pub struct Sjf {
    tie_break: SjfTieBreak,
    verbosity: u8,
}

impl Sjf {
    /// Creates a silent SJF scheduler breaking ties by arrival, then pid.
    pub fn new() -> Self {
        Self {
            tie_break: SjfTieBreak::ArrivalThenPid,
            verbosity: VERBOSITY_SILENT,
        }
    }

    /// Sets the tie-break policy for equal burst times.
    pub fn with_tie_break(mut self, tie_break: SjfTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the logging verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Index of the next process to run, or `None` if nothing is ready.
    fn select(&self, state: &WorkingSet) -> Option<usize> {
        let ready = state.ready();
        // The arena stays in input order, so the index doubles as input position.
        match self.tie_break {
            SjfTieBreak::ArrivalThenPid => ready.min_by_key(|&i| {
                let p = state.process(i);
                (p.burst_time, p.arrival_time, p.pid)
            }),
            SjfTieBreak::InputOrder => ready.min_by_key(|&i| (state.process(i).burst_time, i)),
        }
    }
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult> {
        let mut state = WorkingSet::new(processes, self.verbosity)?;

        while !state.all_finished() {
            crate::log_event!(
                self.verbosity,
                QUEUE,
                t = state.clock(),
                "ready: {:?}",
                state.ready().map(|i| state.process(i).pid).collect::<Vec<_>>()
            );

            match self.select(&state) {
                Some(idx) => {
                    let burst = state.process(idx).burst_time;
                    state.run(idx, burst);
                }
                None => {
                    let Some(next) = state.earliest_pending_arrival() else {
                        break;
                    };
                    state.idle_until(next);
                }
            }
        }

        Ok(state.into_result(Algorithm::Sjf))
    }
}
