/*!
 * Round Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::dispatch;
use crate::core::types::Slot;
use crate::process::ProcessTable;
use crate::scheduler::stats::PolicyStats;
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{PolicyKind, Quantum};
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Quantum,
    queue: VecDeque<Slot>,
    running: Option<Slot>,
    stats: PolicyStats,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
            running: None,
            stats: PolicyStats::default(),
        }
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &str {
        PolicyKind::RoundRobin.as_str()
    }

    fn admit(&mut self, slot: Slot, _table: &mut ProcessTable) {
        self.queue.push_back(slot);
    }

    fn select_next(&self, _table: &ProcessTable) -> Option<Slot> {
        self.queue.front().copied()
    }

    fn advance_one_tick(&mut self, table: &mut ProcessTable) -> Option<Slot> {
        if let Some(current) = self.running.take() {
            let process = &table[current];
            if !process.is_completed() {
                if !self.quantum.is_expired(process.time_in_cpu()) {
                    table[current].tick_slice();
                    self.running = Some(current);
                    return Some(current);
                }

                // Quantum used up: back of the line
                debug!(
                    "Process {} preempted after {} ticks (remaining: {})",
                    process.id(),
                    process.time_in_cpu(),
                    process.remaining_time()
                );
                self.queue.push_back(current);
                self.stats.inc_preemptions();
            }
        }

        let next = self.queue.pop_front()?;
        self.running = Some(next);
        Some(dispatch(
            table,
            next,
            &mut self.stats,
            PolicyKind::RoundRobin.as_str(),
        ))
    }

    fn running(&self) -> Option<Slot> {
        self.running
    }

    fn stats(&self) -> PolicyStats {
        self.stats
    }
}
