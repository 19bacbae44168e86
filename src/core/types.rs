/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated clock tick
pub type Tick = u64;

/// Static priority (lower value is scheduled first)
pub type Priority = u8;

/// Index of a process inside a [`ProcessTable`](crate::process::ProcessTable)
pub type Slot = usize;

/// Feedback level of a process under MLFQ (0 is the most favoured)
pub type Level = usize;

/// Common result type for simulator operations
pub type SchedResult<T> = Result<T, super::errors::SchedError>;
