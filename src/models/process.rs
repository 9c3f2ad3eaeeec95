//! Process (job) model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU before it completes.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier.
///
/// Positive and unique within a process set. `0` is never a valid pid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(pub u32);

impl Pid {
    /// Raw numeric id.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl From<u32> for Pid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An input process: identity, arrival and required CPU time.
///
/// Immutable from the simulators' point of view; each run builds its own
/// working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(pid: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: Pid(pid),
            arrival_time,
            burst_time,
        }
    }

    /// Builds a process set from parallel arrival/burst lists.
    ///
    /// Pids are assigned 1..N in input order. Extra entries in the longer
    /// list are ignored.
    pub fn from_times(arrivals: &[i64], bursts: &[i64]) -> Vec<Self> {
        arrivals
            .iter()
            .zip(bursts)
            .zip(1u32..)
            .map(|((&at, &bt), pid)| Self::new(pid, at, bt))
            .collect()
    }
}

/// Final per-process metrics of a finished simulation.
///
/// Only produced once the process has executed its full burst, so every
/// field is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time (AT).
    pub arrival_time: i64,
    /// Burst time (BT).
    pub burst_time: i64,
    /// Completion time (CT).
    pub completion_time: i64,
    /// Turnaround time: CT - AT.
    pub turnaround_time: i64,
    /// Waiting time: TAT - BT.
    pub waiting_time: i64,
    /// Response time: first dispatch - AT.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Derives the metrics of `process` from its completion and first
    /// dispatch instants.
    pub fn finished(process: &Process, completion_time: i64, first_start: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            pid: process.pid,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_start - process.arrival_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_display() {
        assert_eq!(Pid(3).to_string(), "P3");
        assert_eq!(Pid::from(7u32).get(), 7);
    }

    #[test]
    fn test_from_times_assigns_pids_in_order() {
        let procs = Process::from_times(&[0, 1, 2], &[5, 3, 8]);
        assert_eq!(procs.len(), 3);
        assert_eq!(procs[0], Process::new(1, 0, 5));
        assert_eq!(procs[1], Process::new(2, 1, 3));
        assert_eq!(procs[2], Process::new(3, 2, 8));
    }

    #[test]
    fn test_from_times_uneven_lists() {
        let procs = Process::from_times(&[0, 4], &[2]);
        assert_eq!(procs.len(), 1);
    }

    #[test]
    fn test_finished_metrics() {
        let p = Process::new(2, 1, 3);
        let m = ProcessMetrics::finished(&p, 8, 5);
        assert_eq!(m.turnaround_time, 7);
        assert_eq!(m.waiting_time, 4);
        assert_eq!(m.response_time, 4);
    }

    #[test]
    fn test_pid_serializes_transparently() {
        let json = serde_json::to_string(&Process::new(4, 0, 2)).unwrap();
        assert_eq!(json, r#"{"pid":4,"arrival_time":0,"burst_time":2}"#);
    }
}
