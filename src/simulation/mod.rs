/*!
 * Simulation Module
 * Tick-driven driver and the public entry points
 */

mod driver;
mod report;

pub use driver::Simulation;
pub use report::SimulationReport;

use crate::core::types::SchedResult;
use crate::monitoring::Metrics;
use crate::process::Process;
use crate::scheduler::{PolicyKind, SimulationConfig};

/// Run `processes` under the named policy with the default quanta
///
/// `policy_name` must be one of `FCFS`, `SJF`, `RR`, `Priority`, `SRTF`, `MLFQ`.
pub fn run_simulation(policy_name: &str, processes: Vec<Process>) -> SchedResult<Metrics> {
    run_simulation_with_config(policy_name, processes, &SimulationConfig::default())
}

/// Run `processes` under the named policy with explicit quanta
pub fn run_simulation_with_config(
    policy_name: &str,
    processes: Vec<Process>,
    config: &SimulationConfig,
) -> SchedResult<Metrics> {
    let kind: PolicyKind = policy_name.parse()?;
    let report = Simulation::new(kind, processes, config)?.run()?;
    Ok(report.metrics)
}
