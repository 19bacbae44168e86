/*!
 * Process Table
 * Owns every process record for the duration of a simulation run
 */

use super::types::Process;
use crate::core::types::{Pid, Slot};
use std::ops::{Index, IndexMut};

/// Processes of one run, addressed by [`Slot`] in input order.
///
/// Policies hold slots rather than references so the driver can keep
/// mutating records between ticks.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub fn pid(&self, slot: Slot) -> Pid {
        self.processes[slot].id()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn completed(&self) -> usize {
        self.processes.iter().filter(|p| p.is_completed()).count()
    }

    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}

impl Index<Slot> for ProcessTable {
    type Output = Process;

    fn index(&self, slot: Slot) -> &Process {
        &self.processes[slot]
    }
}

impl IndexMut<Slot> for ProcessTable {
    fn index_mut(&mut self, slot: Slot) -> &mut Process {
        &mut self.processes[slot]
    }
}

impl From<Vec<Process>> for ProcessTable {
    fn from(processes: Vec<Process>) -> Self {
        Self::new(processes)
    }
}
