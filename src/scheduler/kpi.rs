//! Schedule quality metrics (KPIs).
//!
//! Aggregates the per-process metrics of a finished run together with its
//! timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg TAT | mean(CT - AT) |
//! | Avg WT | mean(TAT - BT) |
//! | Avg RT | mean(first dispatch - AT) |
//! | Makespan | End of the last segment |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Transitions between different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{ProcessMetrics, Timeline};

/// Average turnaround and waiting time of a process set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean turnaround time.
    pub turnaround_time: f64,
    /// Mean waiting time.
    pub waiting_time: f64,
}

impl Averages {
    /// Computes averages over finished processes.
    ///
    /// Fails with [`SimulationError::EmptyProcessSet`] rather than
    /// producing NaN.
    pub fn calculate(processes: &[ProcessMetrics]) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }
        let n = processes.len() as f64;
        let total_tat: i128 = processes.iter().map(|m| i128::from(m.turnaround_time)).sum();
        let total_wt: i128 = processes.iter().map(|m| i128::from(m.waiting_time)).sum();
        Ok(Self {
            turnaround_time: total_tat as f64 / n,
            waiting_time: total_wt as f64 / n,
        })
    }
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// End of the last segment.
    pub makespan: i64,
    /// Time spent running processes.
    pub busy_time: i64,
    /// Time spent idle.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from finished processes and their timeline.
    pub fn calculate(processes: &[ProcessMetrics], timeline: &Timeline) -> Result<Self> {
        let averages = Averages::calculate(processes)?;
        let n = processes.len() as f64;
        let total_rt: i128 = processes.iter().map(|m| i128::from(m.response_time)).sum();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (busy_time as f64 / makespan as f64, n / makespan as f64)
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_turnaround_time: averages.turnaround_time,
            avg_waiting_time: averages.waiting_time,
            avg_response_time: total_rt as f64 / n,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        })
    }

    /// The two headline averages.
    pub fn averages(&self) -> Averages {
        Averages {
            turnaround_time: self.avg_turnaround_time,
            waiting_time: self.avg_waiting_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pid, Process};

    fn finished(pid: u32, at: i64, bt: i64, ct: i64, start: i64) -> ProcessMetrics {
        ProcessMetrics::finished(&Process::new(pid, at, bt), ct, start)
    }

    #[test]
    fn test_averages_sample() {
        let procs = vec![
            finished(1, 0, 5, 5, 0),
            finished(2, 1, 3, 8, 5),
            finished(3, 2, 8, 16, 8),
        ];
        let avg = Averages::calculate(&procs).unwrap();
        // (5 + 7 + 14) / 3, (0 + 4 + 6) / 3
        assert!((avg.turnaround_time - 8.666_666_666_666_666).abs() < 1e-10);
        assert!((avg.waiting_time - 3.333_333_333_333_333).abs() < 1e-10);
    }

    #[test]
    fn test_averages_empty() {
        assert_eq!(
            Averages::calculate(&[]),
            Err(SimulationError::EmptyProcessSet)
        );
    }

    #[test]
    fn test_kpi_with_idle() {
        let procs = vec![finished(1, 2, 3, 5, 2), finished(2, 5, 5, 10, 5)];
        let mut timeline = Timeline::new();
        timeline.push_idle(0, 2);
        timeline.push_run(Pid(1), 2, 5);
        timeline.push_run(Pid(2), 5, 10);

        let kpi = ScheduleKpi::calculate(&procs, &timeline).unwrap();
        assert_eq!(kpi.makespan, 10);
        assert_eq!(kpi.busy_time, 8);
        assert_eq!(kpi.idle_time, 2);
        assert!((kpi.cpu_utilization - 0.8).abs() < 1e-10);
        assert!((kpi.throughput - 0.2).abs() < 1e-10);
        assert!((kpi.avg_response_time - 0.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 1);
        assert!((kpi.averages().turnaround_time - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_large_times_do_not_overflow() {
        let big = i64::MAX / 2;
        let procs = vec![finished(1, 0, big, big, 0), finished(2, 0, big, 2 * big, big)];
        let avg = Averages::calculate(&procs).unwrap();
        let expected = 1.5 * big as f64;
        assert!((avg.turnaround_time - expected).abs() / expected < 1e-12);
        assert!((avg.waiting_time - 0.5 * big as f64).abs() / expected < 1e-12);
    }

    #[test]
    fn test_kpi_empty() {
        let result = ScheduleKpi::calculate(&[], &Timeline::new());
        assert_eq!(result, Err(SimulationError::EmptyProcessSet));
    }
}
