/*!
 * Process Types
 * The unit of work and its mutable simulation state
 */

use crate::core::errors::SchedError;
use crate::core::types::{Level, Pid, Priority, SchedResult, Tick};
use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// `id`, `arrival_time`, `burst_time` and `priority` are fixed at construction.
/// The remaining fields are owned by the simulation driver and the active policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    id: Pid,
    arrival_time: Tick,
    burst_time: Tick,
    priority: Priority,

    remaining_time: Tick,
    current_priority: Level,
    time_in_cpu: Tick,
    completion_time: Option<Tick>,
    waiting_time: Tick,
    turnaround_time: Tick,
}

impl Process {
    /// Create a process with the default priority of 0
    pub fn new(id: Pid, arrival_time: i64, burst_time: i64) -> SchedResult<Self> {
        Self::with_priority(id, arrival_time, burst_time, 0)
    }

    /// Create a process with an explicit static priority
    pub fn with_priority(
        id: Pid,
        arrival_time: i64,
        burst_time: i64,
        priority: Priority,
    ) -> SchedResult<Self> {
        if arrival_time < 0 {
            return Err(SchedError::InvalidProcess(format!(
                "process {} has negative arrival time {}",
                id, arrival_time
            )));
        }
        if burst_time <= 0 {
            return Err(SchedError::InvalidProcess(format!(
                "process {} has non-positive burst time {}",
                id, burst_time
            )));
        }

        let burst_time = burst_time as Tick;
        Ok(Self {
            id,
            arrival_time: arrival_time as Tick,
            burst_time,
            priority,
            remaining_time: burst_time,
            current_priority: 0,
            time_in_cpu: 0,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        })
    }

    #[inline]
    pub fn id(&self) -> Pid {
        self.id
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    /// MLFQ feedback level
    #[inline]
    pub fn current_priority(&self) -> Level {
        self.current_priority
    }

    /// Consecutive ticks executed in the current slice
    #[inline]
    pub fn time_in_cpu(&self) -> Tick {
        self.time_in_cpu
    }

    #[inline]
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Only meaningful once the process has completed
    #[inline]
    pub fn waiting_time(&self) -> Tick {
        self.waiting_time
    }

    /// Only meaningful once the process has completed
    #[inline]
    pub fn turnaround_time(&self) -> Tick {
        self.turnaround_time
    }

    /// Set the MLFQ feedback level
    pub fn set_current_priority(&mut self, level: Level) {
        self.current_priority = level;
    }

    /// Start a fresh slice: the process has just become the running one
    pub fn start_slice(&mut self) {
        self.time_in_cpu = 0;
    }

    /// Account one executed tick against the current slice
    pub fn tick_slice(&mut self) {
        self.time_in_cpu += 1;
    }

    /// Consume one tick of work. Returns true when this tick finished the process.
    pub(crate) fn execute_tick(&mut self, now: Tick) -> bool {
        self.remaining_time = self.remaining_time.saturating_sub(1);
        if self.remaining_time == 0 {
            self.complete(now);
            true
        } else {
            false
        }
    }

    /// Build a record without validation
    #[cfg(test)]
    pub(crate) fn unchecked(id: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            current_priority: 0,
            time_in_cpu: 0,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    fn complete(&mut self, now: Tick) {
        self.completion_time = Some(now);
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

/// Unvalidated process description, as read from a workload file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: Pid,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: Priority,
}

impl TryFrom<ProcessSpec> for Process {
    type Error = SchedError;

    fn try_from(spec: ProcessSpec) -> SchedResult<Self> {
        Process::with_priority(spec.id, spec.arrival_time, spec.burst_time, spec.priority)
    }
}
