//! Plain-text rendering of simulation results.
//!
//! Renderers only build strings; writing them anywhere is up to the caller.

use std::fmt::Write;

use crate::error::Result;
use crate::models::{ProcessMetrics, Timeline};
use crate::scheduler::{Averages, SimulationResult};

/// Per-process table: `Process AT BT CT TAT WT`, tab-separated.
pub fn render_table(processes: &[ProcessMetrics]) -> String {
    let mut out = String::from("Process\tAT\tBT\tCT\tTAT\tWT\n");
    out.push_str(&"-".repeat(41));
    out.push('\n');
    for m in processes {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            m.pid, m.arrival_time, m.burst_time, m.completion_time, m.turnaround_time, m.waiting_time
        );
    }
    out
}

/// Average TAT and WT, two decimals.
pub fn render_averages(averages: &Averages) -> String {
    format!(
        "Average TAT = {:.2}\nAverage WT  = {:.2}\n",
        averages.turnaround_time, averages.waiting_time
    )
}

/// Gantt chart: a label row followed by the segment boundary times.
///
/// ```text
/// | P1 | IDLE | P2 |
/// 0	5	7	9
/// ```
pub fn render_gantt(timeline: &Timeline) -> String {
    let segments = timeline.segments();
    let Some(last) = segments.last() else {
        return String::from("Gantt chart: (none)\n");
    };

    let mut out = String::new();
    for s in segments {
        let _ = write!(out, "| {} ", s.slot);
    }
    out.push_str("|\n");
    for s in segments {
        let _ = write!(out, "{}\t", s.start);
    }
    let _ = writeln!(out, "{}", last.end);
    out
}

/// Heading, table, averages and Gantt chart for one run.
pub fn render_result(result: &SimulationResult) -> Result<String> {
    let averages = result.averages()?;
    Ok(format!(
        "--- {} ---\n\n{}\n{}\nGantt Chart:\n{}",
        result.algorithm,
        render_table(&result.processes),
        render_averages(&averages),
        render_gantt(&result.timeline)
    ))
}
