/*!
 * Shortest Remaining Time First
 * Preemptive SJF: re-evaluated every tick
 */

use super::dispatch;
use crate::core::types::Slot;
use crate::process::ProcessTable;
use crate::scheduler::ready::ReadySet;
use crate::scheduler::stats::PolicyStats;
use crate::scheduler::traits::Policy;
use crate::scheduler::types::PolicyKind;
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct Srtf {
    ready: ReadySet,
    running: Option<Slot>,
    stats: PolicyStats,
}

impl Srtf {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for Srtf {
    fn name(&self) -> &str {
        PolicyKind::Srtf.as_str()
    }

    fn admit(&mut self, slot: Slot, _table: &mut ProcessTable) {
        self.ready.push(slot);
    }

    fn select_next(&self, table: &ProcessTable) -> Option<Slot> {
        self.ready.best_by(table, |p| p.remaining_time())
    }

    fn advance_one_tick(&mut self, table: &mut ProcessTable) -> Option<Slot> {
        if self.running.is_some_and(|s| table[s].is_completed()) {
            self.running = None;
        }

        let candidate = self.select_next(table);
        match (self.running, candidate) {
            (Some(current), Some(next))
                if table[next].remaining_time() < table[current].remaining_time() =>
            {
                debug!(
                    "Process {} preempted by {} (remaining {} > {})",
                    table.pid(current),
                    table.pid(next),
                    table[current].remaining_time(),
                    table[next].remaining_time()
                );
                self.ready.remove(next);
                self.ready.push(current);
                self.stats.inc_preemptions();
                self.running = Some(next);
                Some(dispatch(table, next, &mut self.stats, PolicyKind::Srtf.as_str()))
            }
            (Some(current), _) => {
                table[current].tick_slice();
                Some(current)
            }
            (None, Some(next)) => {
                self.ready.remove(next);
                self.running = Some(next);
                Some(dispatch(table, next, &mut self.stats, PolicyKind::Srtf.as_str()))
            }
            (None, None) => None,
        }
    }

    fn running(&self) -> Option<Slot> {
        self.running
    }

    fn stats(&self) -> PolicyStats {
        self.stats
    }
}
