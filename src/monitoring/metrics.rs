/*!
 * Metrics Aggregation
 * Post-run reduction over completed processes
 */

use crate::core::errors::SchedError;
use crate::core::types::{SchedResult, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean ticks spent ready but not running
    pub average_waiting_time: f64,
    /// Mean completion minus arrival
    pub average_turnaround_time: f64,
    /// Busy ticks as a percentage of elapsed ticks
    pub cpu_utilization: f64,
    /// Completed processes per tick
    pub throughput: f64,
}

impl Metrics {
    /// Reduce the final process list of a run that lasted `elapsed` ticks
    pub fn from_processes(processes: &[Process], elapsed: Tick) -> SchedResult<Self> {
        if processes.is_empty() {
            return Err(SchedError::EmptyWorkload);
        }
        if elapsed == 0 {
            return Err(SchedError::ZeroElapsed);
        }

        let count = processes.len() as f64;
        let total_waiting: Tick = processes.iter().map(Process::waiting_time).sum();
        let total_turnaround: Tick = processes.iter().map(Process::turnaround_time).sum();
        let total_burst: Tick = processes.iter().map(Process::burst_time).sum();
        let elapsed = elapsed as f64;

        Ok(Self {
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            cpu_utilization: 100.0 * total_burst as f64 / elapsed,
            throughput: count / elapsed,
        })
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Waiting Time: {:.2} ms", self.average_waiting_time)?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2} ms",
            self.average_turnaround_time
        )?;
        writeln!(f, "CPU Utilization: {:.2}%", self.cpu_utilization)?;
        write!(f, "Throughput: {:.2} processes/ms", self.throughput)
    }
}
