/*!
 * Ready Set
 * Unordered ready structure for the selection-key policies
 */

use crate::core::types::Slot;
use crate::process::{Process, ProcessTable};

/// Unordered set of ready processes
#[derive(Debug, Clone, Default)]
pub(crate) struct ReadySet {
    slots: Vec<Slot>,
}

impl ReadySet {
    pub fn push(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    pub fn remove(&mut self, slot: Slot) -> bool {
        match self.slots.iter().position(|&s| s == slot) {
            Some(pos) => {
                self.slots.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Ready process minimising `key`, ties broken by lowest pid.
    ///
    /// Completed processes are skipped.
    pub fn best_by<K, F>(&self, table: &ProcessTable, key: F) -> Option<Slot>
    where
        K: Ord,
        F: Fn(&Process) -> K,
    {
        self.slots
            .iter()
            .copied()
            .filter(|&slot| !table[slot].is_completed())
            .min_by_key(|&slot| (key(&table[slot]), table[slot].id()))
    }
}
