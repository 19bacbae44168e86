/*!
 * Non-Preemptive Policies
 * FCFS, SJF and static Priority: once chosen, a process runs to completion
 */

use super::dispatch;
use crate::core::types::{Slot, Tick};
use crate::process::{Process, ProcessTable};
use crate::scheduler::ready::ReadySet;
use crate::scheduler::stats::PolicyStats;
use crate::scheduler::traits::Policy;
use crate::scheduler::types::PolicyKind;

/// Field a non-preemptive policy minimises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionKey {
    Arrival,
    Burst,
    Priority,
}

impl SelectionKey {
    #[inline]
    fn of(self, process: &Process) -> Tick {
        match self {
            Self::Arrival => process.arrival_time(),
            Self::Burst => process.burst_time(),
            Self::Priority => Tick::from(process.priority()),
        }
    }

    const fn kind(self) -> PolicyKind {
        match self {
            Self::Arrival => PolicyKind::Fcfs,
            Self::Burst => PolicyKind::Sjf,
            Self::Priority => PolicyKind::Priority,
        }
    }
}

/// Selection-key policy without preemption
#[derive(Debug, Clone)]
pub struct NonPreemptive {
    key: SelectionKey,
    ready: ReadySet,
    running: Option<Slot>,
    stats: PolicyStats,
}

impl NonPreemptive {
    fn with_key(key: SelectionKey) -> Self {
        Self {
            key,
            ready: ReadySet::default(),
            running: None,
            stats: PolicyStats::default(),
        }
    }

    /// Minimum arrival time first
    pub fn fcfs() -> Self {
        Self::with_key(SelectionKey::Arrival)
    }

    /// Minimum burst time first
    pub fn sjf() -> Self {
        Self::with_key(SelectionKey::Burst)
    }

    /// Minimum priority value first
    pub fn priority() -> Self {
        Self::with_key(SelectionKey::Priority)
    }

    pub fn kind(&self) -> PolicyKind {
        self.key.kind()
    }
}

impl Policy for NonPreemptive {
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    fn admit(&mut self, slot: Slot, _table: &mut ProcessTable) {
        self.ready.push(slot);
    }

    fn select_next(&self, table: &ProcessTable) -> Option<Slot> {
        let key = self.key;
        self.ready.best_by(table, |p| key.of(p))
    }

    fn advance_one_tick(&mut self, table: &mut ProcessTable) -> Option<Slot> {
        if let Some(current) = self.running.filter(|&s| !table[s].is_completed()) {
            table[current].tick_slice();
            return Some(current);
        }
        self.running = None;

        let next = self.select_next(table)?;
        self.ready.remove(next);
        self.running = Some(next);
        Some(dispatch(table, next, &mut self.stats, self.key.kind().as_str()))
    }

    fn running(&self) -> Option<Slot> {
        self.running
    }

    fn stats(&self) -> PolicyStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, segments, table};
    use super::*;

    #[test]
    fn test_fcfs_runs_in_arrival_order() {
        let mut t = table(&[(1, 0, 5, 0), (2, 1, 3, 0), (3, 2, 8, 0), (4, 3, 6, 0)]);
        let mut policy = NonPreemptive::fcfs();
        let timeline = run(&mut policy, &mut t);

        assert_eq!(segments(&timeline), vec![(1, 5), (2, 3), (3, 8), (4, 6)]);
        assert_eq!(policy.stats().dispatches, 4);
        assert_eq!(policy.stats().preemptions, 0);
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        // P2 is shorter but arrives after P1 started
        let mut t = table(&[(1, 0, 6, 0), (2, 1, 2, 0), (3, 1, 4, 0)]);
        let mut policy = NonPreemptive::sjf();
        let timeline = run(&mut policy, &mut t);

        assert_eq!(segments(&timeline), vec![(1, 6), (2, 2), (3, 4)]);
    }

    #[test]
    fn test_priority_lower_value_first() {
        let mut t = table(&[(1, 0, 2, 5), (2, 0, 2, 1), (3, 0, 2, 3), (4, 0, 2, 1)]);
        let mut policy = NonPreemptive::priority();
        let timeline = run(&mut policy, &mut t);

        // Equal priority (2 and 4) breaks on lowest pid
        assert_eq!(segments(&timeline), vec![(2, 2), (4, 2), (3, 2), (1, 2)]);
    }

    #[test]
    fn test_constructors_map_to_kinds() {
        assert_eq!(NonPreemptive::fcfs().kind(), PolicyKind::Fcfs);
        assert_eq!(NonPreemptive::sjf().kind(), PolicyKind::Sjf);
        assert_eq!(NonPreemptive::priority().kind(), PolicyKind::Priority);
        assert_eq!(NonPreemptive::priority().name(), "Priority");
    }

    #[test]
    fn test_select_next_is_pure() {
        let mut t = table(&[(1, 0, 3, 0), (2, 0, 1, 0)]);
        let mut policy = NonPreemptive::sjf();
        policy.admit(0, &mut t);
        policy.admit(1, &mut t);

        assert_eq!(policy.select_next(&t), Some(1));
        assert_eq!(policy.select_next(&t), Some(1));
        assert_eq!(policy.running(), None);
    }

    #[test]
    fn test_idle_until_arrival() {
        let mut t = table(&[(1, 3, 2, 0)]);
        let mut policy = NonPreemptive::fcfs();
        let timeline = run(&mut policy, &mut t);

        assert_eq!(timeline, vec![None, None, None, Some(1), Some(1)]);
        assert_eq!(t[0].completion_time(), Some(5));
    }
}
