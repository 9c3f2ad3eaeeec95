//! Discrete-event CPU scheduling simulator.
//!
//! Simulates a single CPU over integer time units under three classic
//! disciplines and reports, per process, completion, turnaround and
//! waiting time, plus a Gantt timeline of CPU occupancy.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Pid`, `Process`, `ProcessMetrics`,
//!   `Segment`, `Slot`, `Timeline`
//! - **`scheduler`**: `Fcfs`, `Sjf`, `RoundRobin`, the `Simulator` facade,
//!   and `ScheduleKpi`
//! - **`validation`**: Input integrity checks (empty sets, burst times,
//!   duplicate pids)
//! - **`config`**: `Quantum`, `SjfTieBreak`, `SimulationConfig`
//! - **`report`**: Table, averages and Gantt chart rendering
//! - **`workload`**: Sample and random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusim::config::{Quantum, SimulationConfig};
//! use u_cpusim::scheduler::{Algorithm, Simulator};
//! use u_cpusim::workload::sample_workload;
//!
//! let simulator = Simulator::new(SimulationConfig::new().with_raw_quantum(0));
//! let result = simulator
//!     .run(Algorithm::RoundRobin { quantum: Quantum::DEFAULT }, &sample_workload())
//!     .unwrap();
//! let averages = result.averages().unwrap();
//! assert!((averages.waiting_time - 6.0).abs() < 1e-10);
//! ```
//!
//! # Non-goals
//!
//! Preemptive SJF, priority scheduling, multiprocessor scheduling and
//! real-time execution are out of scope.

pub mod logging;

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
