/*!
 * Simulation Report
 * Everything a finished run produced
 */

use crate::core::types::{Pid, Tick};
use crate::monitoring::Metrics;
use crate::process::Process;
use crate::scheduler::PolicyStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub run_id: String,
    pub policy: String,
    pub metrics: Metrics,
    /// Total ticks until the last completion
    pub elapsed: Tick,
    /// Completed processes in input order
    pub processes: Vec<Process>,
    pub completion_order: Vec<Pid>,
    /// Process executed in each tick (`None` when idle)
    pub timeline: Vec<Option<Pid>>,
    pub stats: PolicyStats,
}

impl SimulationReport {
    /// Completed process with the given id
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == pid)
    }

    /// Ticks in which no process executed
    pub fn idle_ticks(&self) -> usize {
        self.timeline.iter().filter(|slot| slot.is_none()).count()
    }
}
