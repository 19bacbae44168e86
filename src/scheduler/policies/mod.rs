/*!
 * Scheduling Policies
 * The six built-in policy implementations and their factory
 */

mod mlfq;
mod non_preemptive;
mod round_robin;
mod srtf;

pub use mlfq::Mlfq;
pub use non_preemptive::NonPreemptive;
pub use round_robin::RoundRobin;
pub use srtf::Srtf;

use super::config::SimulationConfig;
use super::stats::PolicyStats;
use super::traits::Policy;
use super::types::PolicyKind;
use crate::core::types::Slot;
use crate::process::ProcessTable;
use log::debug;

/// Build the policy instance for `kind`
pub fn build_policy(kind: PolicyKind, config: &SimulationConfig) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Fcfs => Box::new(NonPreemptive::fcfs()),
        PolicyKind::Sjf => Box::new(NonPreemptive::sjf()),
        PolicyKind::Priority => Box::new(NonPreemptive::priority()),
        PolicyKind::Srtf => Box::new(Srtf::new()),
        PolicyKind::RoundRobin => Box::new(RoundRobin::new(config.rr_quantum)),
        PolicyKind::Mlfq => Box::new(Mlfq::new(config.mlfq_quanta)),
    }
}

/// Make `slot` the running process and account its first tick
fn dispatch(table: &mut ProcessTable, slot: Slot, stats: &mut PolicyStats, policy: &str) -> Slot {
    let process = &mut table[slot];
    process.start_slice();
    process.tick_slice();
    stats.inc_dispatches();
    debug!(
        "Dispatched process {} ({}, remaining: {})",
        process.id(),
        policy,
        process.remaining_time()
    );
    slot
}
