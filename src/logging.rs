//! Simulation event logging with verbosity control.
//!
//! Simulators report what they decide as they advance the clock. Output
//! goes to stderr and costs nothing below the event's level.
//!
//! | Level | Events |
//! |-------|--------|
//! | 0 `SILENT` | none |
//! | 1 `DECISIONS` | run headers, dispatches, idle gaps, completions |
//! | 2 `QUEUE` | ready set / ready queue contents after each decision |
//! | 3 `SLICES` | per-slice internals (preemptions, remaining work) |

/// No output.
pub const VERBOSITY_SILENT: u8 = 0;
/// Scheduling decisions.
pub const VERBOSITY_DECISIONS: u8 = 1;
/// Ready set and queue snapshots.
pub const VERBOSITY_QUEUE: u8 = 2;
/// Per-slice internals.
pub const VERBOSITY_SLICES: u8 = 3;

/// Logs a simulation event when `verbosity` reaches `level`.
///
/// `level` is one of `DECISIONS`, `QUEUE` or `SLICES`. With a
/// `t = clock` argument the line is prefixed by the simulation time.
///
/// ```
/// use u_cpusim::log_event;
///
/// let verbosity = u_cpusim::logging::VERBOSITY_SILENT;
/// log_event!(verbosity, DECISIONS, t = 4, "dispatch {}", "P1");
/// log_event!(verbosity, DECISIONS, "--- {} ---", "FCFS");
/// ```
#[macro_export]
macro_rules! log_event {
    (@emit $verbosity:expr, $level:expr, t = $clock:expr, $($arg:tt)*) => {
        if $verbosity >= $level {
            eprintln!("[t={}] {}", $clock, format_args!($($arg)*));
        }
    };
    (@emit $verbosity:expr, $level:expr, $($arg:tt)*) => {
        if $verbosity >= $level {
            eprintln!($($arg)*);
        }
    };
    ($verbosity:expr, DECISIONS, $($rest:tt)*) => {
        $crate::log_event!(@emit $verbosity, $crate::logging::VERBOSITY_DECISIONS, $($rest)*)
    };
    ($verbosity:expr, QUEUE, $($rest:tt)*) => {
        $crate::log_event!(@emit $verbosity, $crate::logging::VERBOSITY_QUEUE, $($rest)*)
    };
    ($verbosity:expr, SLICES, $($rest:tt)*) => {
        $crate::log_event!(@emit $verbosity, $crate::logging::VERBOSITY_SLICES, $($rest)*)
    };
}
