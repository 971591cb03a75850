//! Services module
//!
//! External collaborators the engine talks to: the diagnostic sink and the
//! interaction-history log. Both are fire-and-forget and never influence
//! control flow.

pub mod diagnostics;
pub mod history;

// Re-export commonly used services
pub use diagnostics::{DiagnosticSink, TracingDiagnostics};
pub use history::{InteractionHistory, InteractionRecord, MemoryHistory, TracingHistory, AFTER_READY_TEXT};
