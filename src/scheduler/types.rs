/*!
 * Scheduler Types
 * Policy selector and time quantum types
 */

use crate::core::errors::SchedError;
use crate::core::types::{SchedResult, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Round-robin time slice in ticks
pub const DEFAULT_RR_QUANTUM: Tick = 4;

/// Number of MLFQ feedback levels
pub const MLFQ_LEVELS: usize = 3;

/// MLFQ time slice per level in ticks
pub const DEFAULT_MLFQ_QUANTA: [Tick; MLFQ_LEVELS] = [4, 8, 16];

/// The six supported scheduling policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Round robin with a fixed quantum
    RoundRobin,
    /// Static priority (non-preemptive, lower value first)
    Priority,
    /// Shortest remaining time first (preemptive SJF)
    Srtf,
    /// Multi-level feedback queue
    Mlfq,
}

impl PolicyKind {
    /// All policies in menu order
    pub const ALL: [PolicyKind; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::RoundRobin,
        Self::Priority,
        Self::Srtf,
        Self::Mlfq,
    ];

    /// Canonical (case-sensitive) name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
            Self::Srtf => "SRTF",
            Self::Mlfq => "MLFQ",
        }
    }

    /// Map a 1-based menu selection to a policy
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Whether a running process can be displaced before it completes
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::Srtf | Self::Mlfq)
    }
}

impl FromStr for PolicyKind {
    type Err = SchedError;

    fn from_str(s: &str) -> SchedResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SchedError::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PolicyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Time quantum in ticks (always at least one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(pub(super) Tick);

impl Quantum {
    pub fn new(ticks: Tick) -> SchedResult<Self> {
        if ticks == 0 {
            return Err(SchedError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }

    /// Whether a slice of `elapsed` ticks has used up this quantum
    #[inline(always)]
    pub const fn is_expired(&self, elapsed: Tick) -> bool {
        elapsed >= self.0
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("FCFS".parse::<PolicyKind>().unwrap(), PolicyKind::Fcfs);
        assert_eq!("RR".parse::<PolicyKind>().unwrap(), PolicyKind::RoundRobin);
        assert_eq!(
            "Priority".parse::<PolicyKind>().unwrap(),
            PolicyKind::Priority
        );
        assert_eq!("MLFQ".parse::<PolicyKind>().unwrap(), PolicyKind::Mlfq);

        // Exact, case-sensitive match only
        assert_eq!(
            "fcfs".parse::<PolicyKind>(),
            Err(SchedError::UnknownPolicy("fcfs".to_string()))
        );
        assert!("PRIORITY".parse::<PolicyKind>().is_err());
        assert!("round_robin".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(PolicyKind::from_menu_choice(1), Some(PolicyKind::Fcfs));
        assert_eq!(PolicyKind::from_menu_choice(6), Some(PolicyKind::Mlfq));
        assert_eq!(PolicyKind::from_menu_choice(0), None);
        assert_eq!(PolicyKind::from_menu_choice(7), None);

        let preemptive: Vec<_> = PolicyKind::ALL
            .iter()
            .filter(|kind| kind.is_preemptive())
            .map(|kind| kind.as_str())
            .collect();
        assert_eq!(preemptive, vec!["RR", "SRTF", "MLFQ"]);
    }

    #[test]
    fn test_quantum_validation() {
        assert!(Quantum::new(0).is_err());
        let q = Quantum::new(4).unwrap();
        assert!(!q.is_expired(3));
        assert!(q.is_expired(4));

        assert!(serde_json::from_str::<Quantum>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantum>("8").unwrap().ticks(), 8);
    }
}
