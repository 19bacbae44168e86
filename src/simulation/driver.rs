/*!
 * Simulation Driver
 * Advances the clock, admits arrivals and executes one tick at a time
 */

use super::report::SimulationReport;
use crate::core::errors::SchedError;
use crate::core::types::{Pid, SchedResult, Slot, Tick};
use crate::monitoring::{generate_run_id, span_simulation, Metrics};
use crate::process::{validate_workload, Process, ProcessTable};
use crate::scheduler::{build_policy, Policy, PolicyKind, SimulationConfig};
use tracing::{debug, info, trace};

/// One simulation run over a fixed workload
pub struct Simulation {
    policy: Box<dyn Policy>,
    table: ProcessTable,
    /// Slots ordered by arrival time, input order within a tick
    arrivals: Vec<Slot>,
}

impl Simulation {
    /// Prepare a run of `processes` under a built-in policy
    pub fn new(
        kind: PolicyKind,
        processes: Vec<Process>,
        config: &SimulationConfig,
    ) -> SchedResult<Self> {
        Self::with_policy(build_policy(kind, config), processes)
    }

    /// Prepare a run of `processes` under any policy implementation
    pub fn with_policy(policy: Box<dyn Policy>, processes: Vec<Process>) -> SchedResult<Self> {
        validate_workload(&processes)?;

        let table = ProcessTable::new(processes);
        let mut arrivals: Vec<Slot> = (0..table.len()).collect();
        // Stable sort keeps input order for equal arrival ticks
        arrivals.sort_by_key(|&slot| table[slot].arrival_time());

        Ok(Self {
            policy,
            table,
            arrivals,
        })
    }

    /// Latest tick by which a work-conserving policy must have finished
    fn horizon(&self) -> Tick {
        let last_arrival = self
            .table
            .iter()
            .map(Process::arrival_time)
            .max()
            .unwrap_or(0);
        let total_burst: Tick = self.table.iter().map(Process::burst_time).sum();
        last_arrival + total_burst
    }

    /// Run until every process has completed
    pub fn run(mut self) -> SchedResult<SimulationReport> {
        let run_id = generate_run_id();
        let total = self.table.len();
        let span = span_simulation(&run_id, self.policy.name(), total);
        let _guard = span.enter();

        let horizon = self.horizon();
        let mut clock: Tick = 0;
        let mut completed = 0usize;
        let mut next_arrival = 0usize;
        let mut completion_order: Vec<Pid> = Vec::with_capacity(total);
        let mut timeline: Vec<Option<Pid>> = Vec::new();

        info!(horizon, "Simulation started");

        while completed < total {
            while let Some(&slot) = self.arrivals.get(next_arrival) {
                if self.table[slot].arrival_time() > clock {
                    break;
                }
                trace!(pid = self.table.pid(slot), clock, "Process admitted");
                self.policy.admit(slot, &mut self.table);
                next_arrival += 1;
            }

            let executed = self.policy.advance_one_tick(&mut self.table);
            clock += 1;
            timeline.push(executed.map(|slot| self.table.pid(slot)));

            if let Some(slot) = executed {
                let process = &mut self.table[slot];
                if process.is_completed() {
                    return Err(SchedError::CompletedProcessDispatched(process.id()));
                }

                if process.execute_tick(clock) {
                    completed += 1;
                    completion_order.push(process.id());
                    debug!(
                        pid = process.id(),
                        clock,
                        turnaround = process.turnaround_time(),
                        waiting = process.waiting_time(),
                        "Process completed"
                    );
                }
            }

            if completed < total && clock >= horizon {
                return Err(SchedError::Stalled {
                    clock,
                    completed,
                    total,
                });
            }
        }

        span.record("elapsed", clock);

        let stats = self.policy.stats();
        let policy = self.policy.name().to_string();
        let processes = self.table.into_processes();
        let metrics = Metrics::from_processes(&processes, clock)?;

        info!(
            elapsed = clock,
            avg_waiting = metrics.average_waiting_time,
            avg_turnaround = metrics.average_turnaround_time,
            utilization = metrics.cpu_utilization,
            dispatches = stats.dispatches,
            preemptions = stats.preemptions,
            "Simulation finished"
        );

        Ok(SimulationReport {
            run_id,
            policy,
            metrics,
            elapsed: clock,
            processes,
            completion_order,
            timeline,
            stats,
        })
    }
}
