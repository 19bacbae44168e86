/*!
 * Scheduler Tests
 * Every policy over the same four-process workload
 */

use cpu_sched_sim::{
    Pid, PolicyKind, Process, SimulationConfig, Simulation, SimulationReport,
};
use pretty_assertions::assert_eq;

/// (id, arrival, burst, priority)
const WORKLOAD: [(Pid, i64, i64, u8); 4] = [(1, 0, 5, 2), (2, 1, 3, 1), (3, 2, 8, 4), (4, 3, 6, 3)];

fn workload() -> Vec<Process> {
    WORKLOAD
        .iter()
        .map(|&(id, at, bt, prio)| Process::with_priority(id, at, bt, prio).unwrap())
        .collect()
}

fn run(kind: PolicyKind) -> SimulationReport {
    Simulation::new(kind, workload(), &SimulationConfig::default())
        .unwrap()
        .run()
        .unwrap()
}

fn completion_ticks(report: &SimulationReport) -> Vec<u64> {
    report
        .processes
        .iter()
        .map(|p| p.completion_time().unwrap())
        .collect()
}

#[test]
fn test_fcfs_schedule() {
    let report = run(PolicyKind::Fcfs);

    assert_eq!(report.completion_order, vec![1, 2, 3, 4]);
    assert_eq!(completion_ticks(&report), vec![5, 8, 16, 22]);
    assert_eq!(report.metrics.average_waiting_time, 5.75);
    assert_eq!(report.metrics.average_turnaround_time, 11.25);
    assert_eq!(report.stats.preemptions, 0);
}

#[test]
fn test_sjf_schedule() {
    let report = run(PolicyKind::Sjf);

    assert_eq!(report.completion_order, vec![1, 2, 4, 3]);
    assert_eq!(completion_ticks(&report), vec![5, 8, 22, 14]);
    assert_eq!(report.metrics.average_waiting_time, 5.25);
    assert_eq!(report.metrics.average_turnaround_time, 10.75);
}

#[test]
fn test_priority_schedule() {
    let report = run(PolicyKind::Priority);

    // P1 is alone at tick 0 and is never interrupted
    assert_eq!(report.completion_order, vec![1, 2, 4, 3]);
    assert_eq!(report.stats.preemptions, 0);
}

#[test]
fn test_srtf_schedule() {
    let report = run(PolicyKind::Srtf);

    // P2 (3 ticks) preempts P1 (4 left) the tick it arrives
    assert_eq!(report.timeline[1], Some(2));
    assert_eq!(report.completion_order, vec![2, 1, 4, 3]);
    assert_eq!(completion_ticks(&report), vec![8, 4, 22, 14]);
    assert_eq!(report.metrics.average_waiting_time, 5.0);
    assert_eq!(report.metrics.average_turnaround_time, 10.5);
    assert_eq!(report.stats.preemptions, 1);
}

#[test]
fn test_round_robin_schedule() {
    let report = run(PolicyKind::RoundRobin);

    assert_eq!(report.completion_order, vec![2, 1, 3, 4]);
    assert_eq!(completion_ticks(&report), vec![16, 7, 20, 22]);
    assert_eq!(report.metrics.average_waiting_time, 9.25);
    assert_eq!(report.metrics.average_turnaround_time, 14.75);
    assert_eq!(report.stats.preemptions, 3);
}

#[test]
fn test_mlfq_schedule() {
    let report = run(PolicyKind::Mlfq);

    assert_eq!(report.completion_order, vec![2, 1, 3, 4]);
    assert_eq!(completion_ticks(&report), vec![16, 7, 20, 22]);
    assert_eq!(report.stats.demotions, 3);

    let levels: Vec<usize> = report.processes.iter().map(|p| p.current_priority()).collect();
    assert_eq!(levels, vec![1, 0, 1, 1]);
}

#[test]
fn test_every_policy_keeps_the_cpu_busy() {
    for kind in PolicyKind::ALL {
        let report = run(kind);
        assert_eq!(report.elapsed, 22, "{}", kind);
        assert_eq!(report.metrics.cpu_utilization, 100.0, "{}", kind);
        assert_eq!(report.idle_ticks(), 0, "{}", kind);
        assert_eq!(report.policy, kind.as_str());
    }
}

#[test]
fn test_custom_quantum() {
    let config: SimulationConfig = serde_json::from_str(r#"{"rr_quantum": 2}"#).unwrap();
    let processes = vec![
        Process::new(1, 0, 4).unwrap(),
        Process::new(2, 0, 4).unwrap(),
    ];
    let report = Simulation::new(PolicyKind::RoundRobin, processes, &config)
        .unwrap()
        .run()
        .unwrap();

    let expected: Vec<Option<Pid>> = [1, 1, 2, 2, 1, 1, 2, 2].iter().map(|&p| Some(p)).collect();
    assert_eq!(report.timeline, expected);
}
