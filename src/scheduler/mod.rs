//! CPU scheduling simulators and KPI evaluation.
//!
//! Each simulator is a pure function of its input process list: it
//! validates the input, builds a private working copy, and returns the
//! final per-process metrics plus the timeline.
//!
//! # Algorithms
//!
//! - [`Fcfs`]: run in arrival order, each to completion.
//! - [`Sjf`]: among arrived processes, run the shortest burst to completion.
//! - [`RoundRobin`]: cyclic time-sharing with a fixed quantum.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;
mod state;

pub use fcfs::Fcfs;
pub use kpi::{Averages, ScheduleKpi};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::config::{Quantum, SimulationConfig};
use crate::error::Result;
use crate::models::{Pid, Process, ProcessMetrics, Timeline};

/// A CPU scheduling discipline that can simulate a process set.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// The algorithm this scheduler implements, with its parameters.
    fn algorithm(&self) -> Algorithm;

    /// Simulates `processes` to completion.
    ///
    /// The input is never mutated. Fails if the process set is invalid.
    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult>;
}

/// Scheduling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with the given quantum.
    RoundRobin {
        /// Time slice per dispatch.
        quantum: Quantum,
    },
}

impl Algorithm {
    /// All three algorithms, Round Robin using `quantum`.
    pub fn all(quantum: Quantum) -> [Algorithm; 3] {
        [Self::Fcfs, Self::Sjf, Self::RoundRobin { quantum }]
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF (non-preemptive)"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum={quantum})"),
        }
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Final metrics, sorted by pid.
    pub processes: Vec<ProcessMetrics>,
    /// CPU occupancy timeline.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// Metrics for a given process.
    pub fn metrics_for(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.processes
            .binary_search_by_key(&pid, |m| m.pid)
            .ok()
            .map(|i| &self.processes[i])
    }

    /// Average turnaround and waiting time.
    pub fn averages(&self) -> Result<Averages> {
        Averages::calculate(&self.processes)
    }

    /// Full KPI set for this run.
    pub fn kpi(&self) -> Result<ScheduleKpi> {
        ScheduleKpi::calculate(&self.processes, &self.timeline)
    }
}

/// Runs simulations under a shared configuration.
///
/// # Example
///
/// ```
/// use u_cpusim::config::SimulationConfig;
/// use u_cpusim::models::Process;
/// use u_cpusim::scheduler::{Algorithm, Simulator};
///
/// let procs = Process::from_times(&[0, 1, 2], &[5, 3, 8]);
/// let simulator = Simulator::new(SimulationConfig::new());
/// let result = simulator.run(Algorithm::Sjf, &procs).unwrap();
/// assert_eq!(result.timeline.makespan(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the scheduler for `algorithm`, applying configured verbosity
    /// and SJF tie-break.
    pub fn scheduler(&self, algorithm: Algorithm) -> Box<dyn CpuScheduler> {
        let verbosity = self.config.verbosity;
        match algorithm {
            Algorithm::Fcfs => Box::new(Fcfs::new().with_verbosity(verbosity)),
            Algorithm::Sjf => Box::new(
                Sjf::new()
                    .with_tie_break(self.config.sjf_tie_break)
                    .with_verbosity(verbosity),
            ),
            Algorithm::RoundRobin { quantum } => {
                Box::new(RoundRobin::new(quantum).with_verbosity(verbosity))
            }
        }
    }

    /// Simulates `processes` under `algorithm`.
    pub fn run(&self, algorithm: Algorithm, processes: &[Process]) -> Result<SimulationResult> {
        crate::log_event!(self.config.verbosity, DECISIONS, "--- {algorithm} ---");
        self.scheduler(algorithm).simulate(processes)
    }

    /// Runs FCFS, SJF and Round Robin (configured quantum) on independent
    /// copies of the same input.
    pub fn compare(&self, processes: &[Process]) -> Result<Vec<SimulationResult>> {
        Algorithm::all(self.config.quantum)
            .into_iter()
            .map(|algorithm| self.run(algorithm, processes))
            .collect()
    }
}
