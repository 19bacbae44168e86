/*!
 * Workload Validation
 * Checks a process list before a simulation run and parses workload files
 */

use super::types::{Process, ProcessSpec};
use crate::core::errors::SchedError;
use crate::core::types::SchedResult;
use std::collections::HashSet;

/// Reject workloads the driver cannot run to completion
pub fn validate_workload(processes: &[Process]) -> SchedResult<()> {
    if processes.is_empty() {
        return Err(SchedError::EmptyWorkload);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if !seen.insert(process.id()) {
            return Err(SchedError::DuplicateProcessId(process.id()));
        }
        // A zero-burst process would complete without ever executing
        if process.burst_time() == 0 {
            return Err(SchedError::InvalidProcess(format!(
                "process {} has zero burst time",
                process.id()
            )));
        }
    }

    Ok(())
}

/// Parse a JSON array of process descriptions into validated processes
pub fn load_workload(json: &str) -> SchedResult<Vec<Process>> {
    let specs: Vec<ProcessSpec> =
        serde_json::from_str(json).map_err(|e| SchedError::InvalidWorkload(e.to_string()))?;

    let processes = specs
        .into_iter()
        .map(Process::try_from)
        .collect::<SchedResult<Vec<_>>>()?;

    validate_workload(&processes)?;
    Ok(processes)
}
