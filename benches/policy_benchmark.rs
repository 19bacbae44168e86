/*!
 * Scheduling Policy Benchmarks
 *
 * Full simulation runs of every policy over generated workloads
 */

use cpu_sched_sim::{Pid, PolicyKind, Process, Simulation, SimulationConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random workload, identical on every run
fn workload(count: u32) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    (1..=count)
        .map(|id: Pid| {
            let arrival = rng.gen_range(0..i64::from(count) * 2);
            let burst = rng.gen_range(1..=20);
            let priority = rng.gen_range(0..8u8);
            Process::with_priority(id, arrival, burst, priority).unwrap()
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    let config = SimulationConfig::default();

    for count in [16u32, 256] {
        let processes = workload(count);
        for kind in PolicyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.as_str(), count),
                &processes,
                |b, processes| {
                    b.iter(|| {
                        let report = Simulation::new(kind, processes.clone(), &config)
                            .unwrap()
                            .run()
                            .unwrap();
                        black_box(report.metrics)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
