//! Per-run working state shared by the simulators.

use crate::error::Result;
use crate::models::{Process, ProcessMetrics, Timeline};
use crate::validation::validate_processes;

use super::{Algorithm, SimulationResult};

/// Mutable copy of one process owned by a single simulation run.
#[derive(Debug, Clone)]
struct WorkingProcess {
    process: Process,
    remaining_time: i64,
    first_start: Option<i64>,
    completion_time: Option<i64>,
}

/// Arena of working processes plus the clock and timeline of one run.
///
/// Simulators refer to processes by index into the arena; nothing here
/// outlives the run or aliases the caller's input.
#[derive(Debug)]
pub(crate) struct WorkingSet {
    procs: Vec<WorkingProcess>,
    timeline: Timeline,
    clock: i64,
    finished: usize,
    verbosity: u8,
}

impl WorkingSet {
    /// Validates `processes` and copies them into a fresh arena, in input order.
    pub fn new(processes: &[Process], verbosity: u8) -> Result<Self> {
        validate_processes(processes)?;
        let procs = processes
            .iter()
            .map(|p| WorkingProcess {
                process: p.clone(),
                remaining_time: p.burst_time,
                first_start: None,
                completion_time: None,
            })
            .collect();
        Ok(Self {
            procs,
            timeline: Timeline::new(),
            clock: 0,
            finished: 0,
            verbosity,
        })
    }

    /// Reorders the arena by `(arrival_time, pid)`.
    ///
    /// Must be called before any index is handed out.
    pub fn sort_by_arrival(&mut self) {
        self.procs
            .sort_by_key(|w| (w.process.arrival_time, w.process.pid));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.procs.len()
    }

    #[inline]
    pub fn clock(&self) -> i64 {
        self.clock
    }

    #[inline]
    pub fn process(&self, idx: usize) -> &Process {
        &self.procs[idx].process
    }

    #[inline]
    pub fn remaining(&self, idx: usize) -> i64 {
        self.procs[idx].remaining_time
    }

    #[inline]
    pub fn is_finished(&self, idx: usize) -> bool {
        self.procs[idx].completion_time.is_some()
    }

    pub fn all_finished(&self) -> bool {
        self.finished == self.procs.len()
    }

    /// Indices of unfinished processes that have arrived by the current clock,
    /// in arena order.
    pub fn ready(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.procs.len()).filter(move |&i| {
            !self.is_finished(i) && self.procs[i].process.arrival_time <= self.clock
        })
    }

    /// Earliest arrival among unfinished processes.
    pub fn earliest_pending_arrival(&self) -> Option<i64> {
        self.procs
            .iter()
            .filter(|w| w.completion_time.is_none())
            .map(|w| w.process.arrival_time)
            .min()
    }

    /// Advances the clock to `time`, recording an idle gap if the CPU had
    /// nothing to do. No-op when `time` is not in the future.
    pub fn idle_until(&mut self, time: i64) {
        if self.clock < time {
            crate::log_event!(
                self.verbosity,
                DECISIONS,
                t = self.clock,
                "CPU idle until {}",
                time
            );
            self.timeline.push_idle(self.clock, time);
            self.clock = time;
        }
    }

    /// Runs process `idx` for `exec` time units starting at the current clock.
    ///
    /// Returns `true` when this slice completes the process.
    pub fn run(&mut self, idx: usize, exec: i64) -> bool {
        let start = self.clock;
        // Cannot overflow: validation bounds every clock value by
        // max(arrival) + sum(burst).
        let end = start + exec;
        let verbosity = self.verbosity;
        let w = &mut self.procs[idx];
        debug_assert!(exec >= 1 && exec <= w.remaining_time);
        debug_assert!(w.process.arrival_time <= start);

        crate::log_event!(
            verbosity,
            DECISIONS,
            t = start,
            "dispatch {} for {}",
            w.process.pid,
            exec
        );
        self.timeline.push_run(w.process.pid, start, end);
        w.first_start.get_or_insert(start);
        w.remaining_time -= exec;
        self.clock = end;

        if w.remaining_time > 0 {
            crate::log_event!(
                verbosity,
                SLICES,
                t = end,
                "{} preempted, {} left",
                w.process.pid,
                w.remaining_time
            );
            return false;
        }

        w.completion_time = Some(end);
        self.finished += 1;
        crate::log_event!(verbosity, DECISIONS, t = end, "{} completed", w.process.pid);
        true
    }

    /// Consumes the run, returning per-process metrics sorted by pid.
    pub fn into_result(self, algorithm: Algorithm) -> SimulationResult {
        debug_assert!(self.all_finished(), "run ended with unfinished processes");
        let mut processes: Vec<ProcessMetrics> = self
            .procs
            .iter()
            .filter_map(|w| {
                let completion = w.completion_time?;
                let first_start = w.first_start?;
                Some(ProcessMetrics::finished(&w.process, completion, first_start))
            })
            .collect();
        processes.sort_by_key(|m| m.pid);

        SimulationResult {
            algorithm,
            processes,
            timeline: self.timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::models::{Pid, Slot};

    #[test]
    fn test_new_rejects_invalid_input() {
        let err = WorkingSet::new(&[], 0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_sort_by_arrival_then_pid() {
        let procs = vec![
            Process::new(3, 2, 1),
            Process::new(2, 0, 1),
            Process::new(1, 0, 1),
        ];
        let mut set = WorkingSet::new(&procs, 0).unwrap();
        set.sort_by_arrival();
        let order: Vec<Pid> = (0..set.len()).map(|i| set.process(i).pid).collect();
        assert_eq!(order, vec![Pid(1), Pid(2), Pid(3)]);
    }

    #[test]
    fn test_run_and_idle() {
        let procs = vec![Process::new(1, 2, 3)];
        let mut set = WorkingSet::new(&procs, 0).unwrap();
        assert_eq!(set.ready().count(), 0);
        assert_eq!(set.earliest_pending_arrival(), Some(2));

        set.idle_until(2);
        set.idle_until(1); // not in the future
        assert_eq!(set.clock(), 2);
        assert_eq!(set.ready().collect::<Vec<_>>(), vec![0]);

        assert!(!set.run(0, 2));
        assert_eq!(set.remaining(0), 1);
        assert!(set.run(0, 1));
        assert!(set.all_finished());
        assert_eq!(set.earliest_pending_arrival(), None);

        let result = set.into_result(Algorithm::Fcfs);
        let m = &result.processes[0];
        assert_eq!(m.completion_time, 5);
        assert_eq!(m.response_time, 0);
        assert_eq!(result.timeline.segments()[0].slot, Slot::Idle);
        assert_eq!(result.timeline.len(), 3);
    }
}
