/*!
 * Scheduling Simulator - Command Line Entry Point
 *
 * Usage: sched-sim [workload.json]
 *
 * Prompts for one of the six policies, runs the workload (a built-in sample
 * when no file is given) and prints the resulting metrics.
 */

use cpu_sched_sim::{
    init_tracing, load_workload, Process, PolicyKind, SchedResult, Simulation, SimulationConfig,
};
use miette::{miette, IntoDiagnostic, WrapErr};
use std::io::{self, BufRead, Write};
use tracing::info;

fn sample_workload() -> SchedResult<Vec<Process>> {
    Ok(vec![
        Process::with_priority(1, 0, 5, 2)?,
        Process::with_priority(2, 1, 3, 1)?,
        Process::with_priority(3, 2, 8, 4)?,
        Process::with_priority(4, 3, 6, 3)?,
    ])
}

fn read_choice() -> miette::Result<PolicyKind> {
    println!("Select a scheduling algorithm:");
    for (index, kind) in PolicyKind::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, kind);
    }
    print!("Enter choice (1-{}): ", PolicyKind::ALL.len());
    io::stdout().flush().into_diagnostic()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .into_diagnostic()
        .wrap_err("Failed to read menu selection")?;

    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(PolicyKind::from_menu_choice)
        .ok_or_else(|| miette!("Invalid choice '{}': expected a number from 1 to 6", line.trim()))
}

fn main() -> miette::Result<()> {
    init_tracing();

    let processes = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read workload file {}", path))?;
            load_workload(&json)?
        }
        None => sample_workload()?,
    };
    info!(processes = processes.len(), "Workload loaded");

    let config = SimulationConfig::from_env()?;
    let kind = read_choice()?;
    let report = Simulation::new(kind, processes, &config)?.run()?;

    let use_json = std::env::var("SCHED_OUTPUT_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if use_json {
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{}", json);
    } else {
        println!();
        println!("{} scheduling", report.policy);
        println!("{}", report.metrics);
    }

    Ok(())
}
