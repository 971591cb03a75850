//! Per-flow conversation handlers
//!
//! One module per flow. Each flow exposes a `begin` initializer for fresh
//! turns and, where the flow spans several turns, a `resume` response
//! handler consuming the next answer.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

/// Response when get/delete receive no usable number; these flows terminate
/// instead of re-prompting, unlike create
pub(crate) const INVALID_NUMBER_FINAL: &str = "Sorry, I need a valid number. Please ensure the \
    token number does not come immediately after the word token in your command, or else it \
    would be swapped out";
