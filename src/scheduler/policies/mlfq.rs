/*!
 * Multi-Level Feedback Queue
 * Three FIFO levels with growing quanta and strict level priority
 */

use super::dispatch;
use crate::core::types::{Level, Slot};
use crate::process::ProcessTable;
use crate::scheduler::stats::PolicyStats;
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{PolicyKind, Quantum, MLFQ_LEVELS};
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Mlfq {
    quanta: [Quantum; MLFQ_LEVELS],
    queues: [VecDeque<Slot>; MLFQ_LEVELS],
    running: Option<Slot>,
    stats: PolicyStats,
}

impl Mlfq {
    pub fn new(quanta: [Quantum; MLFQ_LEVELS]) -> Self {
        Self {
            quanta,
            queues: Default::default(),
            running: None,
            stats: PolicyStats::default(),
        }
    }

    /// Lowest level with a ready process
    fn highest_ready_level(&self) -> Option<Level> {
        self.queues.iter().position(|queue| !queue.is_empty())
    }

    /// Number of ready processes at `level`
    pub fn queued_at(&self, level: Level) -> usize {
        self.queues.get(level).map_or(0, VecDeque::len)
    }
}

impl Policy for Mlfq {
    fn name(&self) -> &str {
        PolicyKind::Mlfq.as_str()
    }

    fn admit(&mut self, slot: Slot, table: &mut ProcessTable) {
        table[slot].set_current_priority(0);
        self.queues[0].push_back(slot);
    }

    fn select_next(&self, _table: &ProcessTable) -> Option<Slot> {
        let level = self.highest_ready_level()?;
        self.queues[level].front().copied()
    }

    fn advance_one_tick(&mut self, table: &mut ProcessTable) -> Option<Slot> {
        if let Some(current) = self.running.take() {
            let process = &table[current];
            let level = process.current_priority();

            if !process.is_completed() {
                if self.quanta[level].is_expired(process.time_in_cpu()) {
                    let demoted = (level + 1).min(MLFQ_LEVELS - 1);
                    debug!(
                        "Process {} used its level {} quantum, moving to level {}",
                        process.id(),
                        level,
                        demoted
                    );
                    table[current].set_current_priority(demoted);
                    self.queues[demoted].push_back(current);
                    self.stats.inc_preemptions();
                    if demoted != level {
                        self.stats.inc_demotions();
                    }
                } else if self.highest_ready_level().is_some_and(|ready| ready < level) {
                    debug!(
                        "Process {} at level {} preempted by a higher level arrival",
                        process.id(),
                        level
                    );
                    self.queues[level].push_back(current);
                    self.stats.inc_preemptions();
                } else {
                    table[current].tick_slice();
                    self.running = Some(current);
                    return Some(current);
                }
            }
        }

        let level = self.highest_ready_level()?;
        let next = self.queues[level].pop_front()?;
        self.running = Some(next);
        Some(dispatch(table, next, &mut self.stats, PolicyKind::Mlfq.as_str()))
    }

    fn running(&self) -> Option<Slot> {
        self.running
    }

    fn stats(&self) -> PolicyStats {
        self.stats
    }
}
