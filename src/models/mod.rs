//! CPU scheduling domain models.
//!
//! Provides the data types shared by every simulator: the input process,
//! its final metrics, and the timeline of CPU occupancy.
//!
//! # Terms
//!
//! | Term | Meaning |
//! |------|---------|
//! | AT | Arrival time |
//! | BT | Burst time (total CPU demand) |
//! | CT | Completion time |
//! | TAT | Turnaround time, CT - AT |
//! | WT | Waiting time, TAT - BT |

mod process;
mod timeline;

pub use process::{Pid, Process, ProcessMetrics};
pub use timeline::{DiscontiguousTimeline, Segment, Slot, Timeline};
