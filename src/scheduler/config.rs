/*!
 * Simulation Configuration
 * Time quanta for the preemptive policies
 */

use super::types::{Quantum, DEFAULT_MLFQ_QUANTA, DEFAULT_RR_QUANTUM, MLFQ_LEVELS};
use crate::core::types::{SchedResult, Tick};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Quanta used to build round-robin and MLFQ policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rr_quantum: Quantum,
    pub mlfq_quanta: [Quantum; MLFQ_LEVELS],
}

impl SimulationConfig {
    /// Load quanta from the environment.
    ///
    /// Environment variables:
    /// - SCHED_RR_QUANTUM: round-robin quantum in ticks (default: 4)
    /// - SCHED_MLFQ_QUANTA: three comma separated ticks (default: 4,8,16)
    pub fn from_env() -> SchedResult<Self> {
        Self::from_values(
            std::env::var("SCHED_RR_QUANTUM").ok().as_deref(),
            std::env::var("SCHED_MLFQ_QUANTA").ok().as_deref(),
        )
    }

    fn from_values(rr: Option<&str>, mlfq: Option<&str>) -> SchedResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = rr {
            match raw.trim().parse::<Tick>() {
                Ok(ticks) => config.rr_quantum = Quantum::new(ticks)?,
                Err(e) => warn!(value = raw, error = %e, "Ignoring malformed SCHED_RR_QUANTUM"),
            }
        }

        if let Some(raw) = mlfq {
            match parse_levels(raw) {
                Some(ticks) => {
                    for (slot, value) in config.mlfq_quanta.iter_mut().zip(ticks) {
                        *slot = Quantum::new(value)?;
                    }
                }
                None => warn!(value = raw, "Ignoring malformed SCHED_MLFQ_QUANTA"),
            }
        }

        Ok(config)
    }
}

fn parse_levels(raw: &str) -> Option<[Tick; MLFQ_LEVELS]> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<Tick>().ok())
        .collect::<Option<Vec<_>>>()?;
    values.try_into().ok()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rr_quantum: Quantum(DEFAULT_RR_QUANTUM),
            mlfq_quanta: DEFAULT_MLFQ_QUANTA.map(Quantum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SchedError;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.rr_quantum.ticks(), 4);
        assert_eq!(config.mlfq_quanta.map(|q| q.ticks()), [4, 8, 16]);
    }

    #[test]
    fn test_from_values() {
        let config = SimulationConfig::from_values(Some("2"), Some("1, 2, 3")).unwrap();
        assert_eq!(config.rr_quantum.ticks(), 2);
        assert_eq!(config.mlfq_quanta.map(|q| q.ticks()), [1, 2, 3]);

        // Malformed values fall back to defaults
        let config = SimulationConfig::from_values(Some("abc"), Some("1,2")).unwrap();
        assert_eq!(config, SimulationConfig::default());

        assert_eq!(
            SimulationConfig::from_values(Some("0"), None),
            Err(SchedError::InvalidQuantum(0))
        );
        assert_eq!(
            SimulationConfig::from_values(None, Some("4,0,16")),
            Err(SchedError::InvalidQuantum(0))
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SimulationConfig = serde_json::from_str(r#"{"rr_quantum": 6}"#).unwrap();
        assert_eq!(config.rr_quantum.ticks(), 6);
        assert_eq!(config.mlfq_quanta.map(|q| q.ticks()), [4, 8, 16]);

        assert!(serde_json::from_str::<SimulationConfig>(r#"{"rr_quantum": 0}"#).is_err());
    }
}
