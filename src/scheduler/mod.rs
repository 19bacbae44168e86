/*!
 * Scheduler Module
 * Scheduling policy abstraction, configuration and the built-in policies
 */

pub mod config;
pub mod policies;
pub(crate) mod ready;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use config::SimulationConfig;
pub use policies::{build_policy, Mlfq, NonPreemptive, RoundRobin, Srtf};
pub use stats::PolicyStats;
pub use traits::Policy;
pub use types::{
    PolicyKind, Quantum, DEFAULT_MLFQ_QUANTA, DEFAULT_RR_QUANTUM, MLFQ_LEVELS,
};
