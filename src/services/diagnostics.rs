//! Diagnostic sink
//!
//! Fire-and-forget diagnostic messages addressed to the host's logging
//! surface. Emitting a diagnostic never affects control flow.

use tracing::{error, info, warn};

/// Sink for diagnostic messages, tagged with the emitting source
pub trait DiagnosticSink: Send + Sync {
    fn notice(&self, message: &str, source: &str);

    fn warning(&self, message: &str, source: &str);

    fn error(&self, message: &str, source: &str);
}

/// Default sink that forwards diagnostics to the tracing subscriber
#[derive(Debug, Default, Clone)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn notice(&self, message: &str, source: &str) {
        info!(source = source, "{}", message);
    }

    fn warning(&self, message: &str, source: &str) {
        warn!(source = source, "{}", message);
    }

    fn error(&self, message: &str, source: &str) {
        error!(source = source, "{}", message);
    }
}
