/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Tick};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedError {
    #[error("Unknown scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::unknown_policy),
        help("Use one of FCFS, SJF, RR, Priority, SRTF or MLFQ (case-sensitive).")
    )]
    UnknownPolicy(String),

    #[error("Invalid process: {0}")]
    #[diagnostic(
        code(process::invalid),
        help("Arrival time must be >= 0 and burst time must be > 0.")
    )]
    InvalidProcess(String),

    #[error("Invalid quantum: {0} ticks")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("A time quantum must be at least one tick.")
    )]
    InvalidQuantum(u64),

    #[error("Duplicate process id: {0}")]
    #[diagnostic(
        code(process::duplicate_id),
        help("Every process in a workload needs a distinct id.")
    )]
    DuplicateProcessId(Pid),

    #[error("Workload contains no processes")]
    #[diagnostic(
        code(simulation::empty_workload),
        help("Metrics are only defined for at least one process.")
    )]
    EmptyWorkload,

    #[error("Simulation ran for zero ticks")]
    #[diagnostic(
        code(simulation::zero_elapsed),
        help("Utilization and throughput are rates over elapsed ticks and need at least one tick.")
    )]
    ZeroElapsed,

    #[error("Invalid workload: {0}")]
    #[diagnostic(
        code(simulation::invalid_workload),
        help("Expected a JSON array of objects with id, arrival_time, burst_time and an optional priority.")
    )]
    InvalidWorkload(String),

    #[error("Policy dispatched process {0} after it completed")]
    #[diagnostic(
        code(simulation::completed_dispatched),
        help("Completed processes must never be selected again.")
    )]
    CompletedProcessDispatched(Pid),

    #[error("Simulation stalled at tick {clock}: {completed}/{total} processes completed")]
    #[diagnostic(
        code(simulation::stalled),
        help("The policy stopped dispatching ready processes.")
    )]
    Stalled {
        clock: Tick,
        completed: usize,
        total: usize,
    },
}
