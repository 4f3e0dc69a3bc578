//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; the main loop turns these into tasks.

/// Task key of the summary load
pub const LOAD_TASK: &str = "summary_load";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the weather summary from the configured source
    LoadSummary,

    /// Abort an in-flight summary load
    CancelLoad,
}
