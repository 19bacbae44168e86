/*!
 * Process Module
 * Process records, workload validation and the per-run process table
 */

pub mod table;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use table::ProcessTable;
pub use types::{Process, ProcessSpec};
pub use validation::{load_workload, validate_workload};
