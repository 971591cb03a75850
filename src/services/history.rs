//! Interaction history sink
//!
//! Every substitution pass appends the rewritten text to an external
//! interaction-history log owned by the host, tagged with the source and a
//! fixed event label.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Event label recorded when the substitution pass rewrites the turn text,
/// named for the host event it runs under
pub const AFTER_READY_TEXT: &str = "after_ready_text";

/// One appended history entry
#[derive(Debug, Clone, Serialize)]
pub struct InteractionRecord {
    pub text: String,
    pub source: String,
    pub event: String,
    pub recorded_at: DateTime<Utc>,
}

/// Sink for interaction history entries, fire-and-forget
pub trait InteractionHistory: Send + Sync {
    fn record(&self, text: &str, source: &str, event: &str);
}

/// Default sink that logs history entries through tracing
#[derive(Debug, Default, Clone)]
pub struct TracingHistory;

impl TracingHistory {
    pub fn new() -> Self {
        Self
    }
}

impl InteractionHistory for TracingHistory {
    fn record(&self, text: &str, source: &str, event: &str) {
        info!(source = source, event = event, text = text, "Interaction history entry");
    }
}

/// In-memory sink collecting records for inspection
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<InteractionRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<InteractionRecord> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl InteractionHistory for MemoryHistory {
    fn record(&self, text: &str, source: &str, event: &str) {
        let entry = InteractionRecord {
            text: text.to_string(),
            source: source.to_string(),
            event: event.to_string(),
            recorded_at: Utc::now(),
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}
