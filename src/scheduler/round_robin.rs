//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival_time, pid)`; a cursor marks the next one
//!    to arrive.
//! 2. A FIFO ready queue holds arena indices of arrived, unfinished
//!    processes.
//! 3. If the queue is empty, record an idle gap up to the next arrival and
//!    admit everything that has arrived by then.
//! 4. Otherwise dequeue the head and run it for `min(remaining, quantum)`.
//!    After the slice, admit new arrivals (`arrival_time <= clock`) first,
//!    then requeue the process at the tail if it still has work.
//!
//! Consecutive slices of the same process are recorded as separate
//! segments; they are never merged.
//!
//! # Termination
//! Every slice is at least one time unit, and total remaining work is
//! bounded by the sum of burst times.

use std::collections::VecDeque;

use crate::config::Quantum;
use crate::error::Result;
use crate::logging::VERBOSITY_SILENT;
use crate::models::Process;

use super::state::WorkingSet;
use super::{Algorithm, CpuScheduler, SimulationResult};

/// FIFO ready queue of arena indices plus the arrival cursor.
#[derive(Debug)]
struct ReadyQueue {
    queue: VecDeque<usize>,
    next_arrival: usize,
}

impl ReadyQueue {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            next_arrival: 0,
        }
    }

    /// Enqueues, in arrival order, every not-yet-admitted process that has
    /// arrived by the current clock. Assumes the arena is sorted by arrival.
    fn admit(&mut self, state: &WorkingSet) {
        while self.next_arrival < state.len()
            && state.process(self.next_arrival).arrival_time <= state.clock()
        {
            self.queue.push_back(self.next_arrival);
            self.next_arrival += 1;
        }
    }

    /// Arrival time of the next process not yet admitted.
    fn upcoming_arrival(&self, state: &WorkingSet) -> Option<i64> {
        (self.next_arrival < state.len()).then(|| state.process(self.next_arrival).arrival_time)
    }
}

/// Round Robin scheduler with a fixed quantum.
///
/// # Example
///
/// ```
/// use u_cpusim::config::Quantum;
/// use u_cpusim::models::Process;
/// use u_cpusim::scheduler::{CpuScheduler, RoundRobin};
///
/// let procs = Process::from_times(&[0, 1, 2], &[5, 3, 8]);
/// let result = RoundRobin::new(Quantum::new(2).unwrap()).simulate(&procs).unwrap();
/// assert_eq!(result.timeline.busy_time(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Quantum,
    verbosity: u8,
}

impl RoundRobin {
    /// Creates a silent Round Robin scheduler.
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            verbosity: VERBOSITY_SILENT,
        }
    }

    /// Sets the logging verbosity.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Configured time slice.
    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(Quantum::DEFAULT)
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult> {
        let mut state = WorkingSet::new(processes, self.verbosity)?;
        state.sort_by_arrival();

        let mut ready = ReadyQueue::new(state.len());
        ready.admit(&state);

        while !state.all_finished() {
            let Some(idx) = ready.queue.pop_front() else {
                let Some(next) = ready.upcoming_arrival(&state) else {
                    break;
                };
                state.idle_until(next);
                ready.admit(&state);
                continue;
            };

            let exec = state.remaining(idx).min(self.quantum.get());
            let finished = state.run(idx, exec);

            // New arrivals go ahead of the process returning from its slice.
            ready.admit(&state);
            if !finished {
                ready.queue.push_back(idx);
            }

            crate::log_event!(
                self.verbosity,
                QUEUE,
                t = state.clock(),
                "queue: {:?}",
                ready
                    .queue
                    .iter()
                    .map(|&i| state.process(i).pid)
                    .collect::<Vec<_>>()
            );
        }

        Ok(state.into_result(self.algorithm()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pid, Segment};

    fn rr(quantum: i64) -> RoundRobin {
        RoundRobin::new(Quantum::new(quantum).unwrap())
    }

    #[test]
    fn test_rr_sample_quantum_2() {
        let procs = Process::from_times(&[0, 1, 2], &[5, 3, 8]);
        let result = rr(2).simulate(&procs).unwrap();

        assert_eq!(
            result.timeline.segments(),
            &[
                Segment::run(Pid(1), 0, 2),
                Segment::run(Pid(2), 2, 4),
                Segment::run(Pid(3), 4, 6),
                Segment::run(Pid(1), 6, 8),
                Segment::run(Pid(2), 8, 9),
                Segment::run(Pid(3), 9, 11),
                Segment::run(Pid(1), 11, 12),
                Segment::run(Pid(3), 12, 14),
                Segment::run(Pid(3), 14, 16),
            ]
        );

        let ct: Vec<i64> = result.processes.iter().map(|m| m.completion_time).collect();
        let tat: Vec<i64> = result.processes.iter().map(|m| m.turnaround_time).collect();
        let wt: Vec<i64> = result.processes.iter().map(|m| m.waiting_time).collect();
        assert_eq!(ct, vec![12, 9, 16]);
        assert_eq!(tat, vec![12, 8, 14]);
        assert_eq!(wt, vec![7, 5, 6]);
        assert_eq!(result.timeline.busy_time(), 16);
    }

    #[test]
    fn test_rr_new_arrivals_before_requeue() {
        // P2 arrives exactly when P1's first slice ends; it runs before P1 resumes.
        let procs = Process::from_times(&[0, 2], &[4, 2]);
        let result = rr(2).simulate(&procs).unwrap();
        assert_eq!(
            result.timeline.segments(),
            &[
                Segment::run(Pid(1), 0, 2),
                Segment::run(Pid(2), 2, 4),
                Segment::run(Pid(1), 4, 6),
            ]
        );
    }

    #[test]
    fn test_rr_single_process_slice_count() {
        let procs = vec![Process::new(1, 0, 7)];
        let result = rr(3).simulate(&procs).unwrap();
        // ceil(7 / 3) = 3 slices, not merged.
        assert_eq!(result.timeline.len(), 3);
        assert_eq!(result.timeline.segments()[2], Segment::run(Pid(1), 6, 7));
        assert_eq!(result.processes[0].waiting_time, 0);
    }

    #[test]
    fn test_rr_leading_and_middle_idle() {
        let procs = vec![Process::new(1, 3, 1), Process::new(2, 6, 3)];
        let result = rr(2).simulate(&procs).unwrap();
        assert_eq!(
            result.timeline.segments(),
            &[
                Segment::idle(0, 3),
                Segment::run(Pid(1), 3, 4),
                Segment::idle(4, 6),
                Segment::run(Pid(2), 6, 8),
                Segment::run(Pid(2), 8, 9),
            ]
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let procs = Process::from_times(&[0, 1, 2], &[5, 3, 8]);
        let result = rr(100).simulate(&procs).unwrap();
        let ct: Vec<i64> = result.processes.iter().map(|m| m.completion_time).collect();
        assert_eq!(ct, vec![5, 8, 16]);
        assert_eq!(result.timeline.len(), 3);
    }

    #[test]
    fn test_rr_response_time() {
        let procs = Process::from_times(&[0, 0, 0], &[3, 3, 3]);
        let result = rr(1).simulate(&procs).unwrap();
        let rt: Vec<i64> = result.processes.iter().map(|m| m.response_time).collect();
        assert_eq!(rt, vec![0, 1, 2]);
        assert_eq!(result.timeline.context_switches(), 8);
    }

    #[test]
    fn test_rr_algorithm_carries_quantum() {
        let scheduler = rr(4);
        assert_eq!(
            scheduler.algorithm(),
            Algorithm::RoundRobin {
                quantum: Quantum::new(4).unwrap()
            }
        );
        assert_eq!(RoundRobin::default().quantum(), Quantum::DEFAULT);
    }
}
