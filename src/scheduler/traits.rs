/*!
 * Scheduler Traits
 * Interface shared by every scheduling policy
 */

use super::stats::PolicyStats;
use crate::core::types::Slot;
use crate::process::ProcessTable;

/// A CPU scheduling policy driven one tick at a time.
///
/// The driver only ever calls these operations; ready structures and the
/// running slot stay private to the implementation.
pub trait Policy: Send {
    /// Policy name used in logs and reports
    fn name(&self) -> &str;

    /// Insert a newly arrived process into the ready structure
    fn admit(&mut self, slot: Slot, table: &mut ProcessTable);

    /// The ready process this policy would pick next, without changing any state
    fn select_next(&self, table: &ProcessTable) -> Option<Slot>;

    /// Select or continue the running process and apply preemption rules.
    ///
    /// Returns the process that executes during this tick, or `None` when idle.
    /// Completed processes must never be returned.
    fn advance_one_tick(&mut self, table: &mut ProcessTable) -> Option<Slot>;

    /// Currently running process
    fn running(&self) -> Option<Slot>;

    /// Dispatch and preemption counters
    fn stats(&self) -> PolicyStats;
}
