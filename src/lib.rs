/*!
 * CPU Scheduling Simulator Library
 * Tick-driven comparison of FCFS, SJF, RR, Priority, SRTF and MLFQ
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::SchedError;
pub use crate::core::types::{Level, Pid, Priority, SchedResult, Slot, Tick};
pub use monitoring::{init_tracing, Metrics};
pub use process::{load_workload, Process, ProcessSpec, ProcessTable};
pub use scheduler::{
    build_policy, Policy, PolicyKind, PolicyStats, Quantum, SimulationConfig,
};
pub use simulation::{run_simulation, run_simulation_with_config, Simulation, SimulationReport};
