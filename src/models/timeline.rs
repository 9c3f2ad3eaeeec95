//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of CPU occupancy segments produced
//! by one simulation run. Segments are half-open `[start, end)` intervals
//! that partition `[0, makespan)` without gaps or overlaps; idle gaps are
//! explicit segments.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

use super::Pid;

/// What occupies the CPU during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// No process is ready.
    Idle,
    /// The given process is executing.
    Process(Pid),
}

impl Slot {
    /// The running process, if any.
    pub fn pid(self) -> Option<Pid> {
        match self {
            Self::Idle => None,
            Self::Process(pid) => Some(pid),
        }
    }

    /// Whether this slot is an idle gap.
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Process(pid) => write!(f, "{pid}"),
        }
    }
}

/// One contiguous CPU occupancy interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Occupant of the CPU.
    pub slot: Slot,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Segment {
    /// A segment during which `pid` runs.
    pub fn run(pid: Pid, start: i64, end: i64) -> Self {
        Self {
            slot: Slot::Process(pid),
            start,
            end,
        }
    }

    /// An idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            slot: Slot::Idle,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered, contiguous sequence of segments.
///
/// Deserialization goes through [`Timeline::try_from`], so a decoded
/// timeline is contiguous like a simulated one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

/// A segment list that does not tile `[0, makespan)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("segment {index} {segment:?} does not continue the timeline at t={expected}")]
pub struct DiscontiguousTimeline {
    /// Position of the first offending segment.
    pub index: usize,
    /// The offending segment.
    pub segment: Segment,
    /// Where the segment should have started.
    pub expected: i64,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment for `pid` running over `[start, end)`.
    pub fn push_run(&mut self, pid: Pid, start: i64, end: i64) {
        self.push(Segment::run(pid, start, end));
    }

    /// Appends an idle segment over `[start, end)`.
    pub fn push_idle(&mut self, start: i64, end: i64) {
        self.push(Segment::idle(start, end));
    }

    fn push(&mut self, segment: Segment) {
        debug_assert!(segment.start < segment.end, "empty segment {segment:?}");
        debug_assert_eq!(
            segment.start,
            self.makespan(),
            "segment {segment:?} does not continue the timeline"
        );
        self.segments.push(segment);
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.slot.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Total time the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.slot.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Segments during which `pid` executes.
    pub fn segments_for(&self, pid: Pid) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.slot == Slot::Process(pid))
            .collect()
    }

    /// Total CPU time granted to `pid`.
    pub fn executed_time(&self, pid: Pid) -> i64 {
        self.segments_for(pid).iter().map(|s| s.duration()).sum()
    }

    /// First dispatch instant of `pid`.
    pub fn first_start(&self, pid: Pid) -> Option<i64> {
        self.segments
            .iter()
            .find(|s| s.slot == Slot::Process(pid))
            .map(|s| s.start)
    }

    /// Whether the segments start at 0 and tile time without gaps.
    pub fn is_contiguous(&self) -> bool {
        Self::check_contiguous(&self.segments).is_ok()
    }

    fn check_contiguous(segments: &[Segment]) -> Result<(), DiscontiguousTimeline> {
        let mut expected = 0;
        for (index, s) in segments.iter().enumerate() {
            if s.start != expected || s.start >= s.end {
                return Err(DiscontiguousTimeline {
                    index,
                    segment: *s,
                    expected,
                });
            }
            expected = s.end;
        }
        Ok(())
    }

    /// Number of switches from one process to a different one.
    ///
    /// Idle gaps are skipped, so `P1 | IDLE | P1` counts as zero switches.
    pub fn context_switches(&self) -> usize {
        let mut last: Option<Pid> = None;
        let mut switches = 0;
        for pid in self.segments.iter().filter_map(|s| s.slot.pid()) {
            if last.is_some_and(|prev| prev != pid) {
                switches += 1;
            }
            last = Some(pid);
        }
        switches
    }
}

impl TryFrom<Vec<Segment>> for Timeline {
    type Error = DiscontiguousTimeline;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Self::check_contiguous(&segments)?;
        Ok(Self { segments })
    }
}

impl<'de> Deserialize<'de> for Timeline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            segments: Vec<Segment>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_from(raw.segments).map_err(serde::de::Error::custom)
    }
}
