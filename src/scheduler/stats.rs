/*!
 * Scheduler Statistics
 * Per-run dispatch and preemption counters
 */

use serde::{Deserialize, Serialize};

/// Counters maintained by every policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStats {
    /// Times a process became the running process
    pub dispatches: u64,
    /// Times a running, unfinished process was returned to the ready structure
    pub preemptions: u64,
    /// MLFQ level demotions
    pub demotions: u64,
}

impl PolicyStats {
    #[inline(always)]
    pub fn inc_dispatches(&mut self) {
        self.dispatches += 1;
    }

    #[inline(always)]
    pub fn inc_preemptions(&mut self) {
        self.preemptions += 1;
    }

    #[inline(always)]
    pub fn inc_demotions(&mut self) {
        self.demotions += 1;
    }
}
