#![allow(dead_code)]
//! Shared test harness
//!
//! Builds a conversation engine over the in-memory stores with a recording
//! diagnostic sink, so tests can drive whole conversations and assert on
//! diagnostics and history.

use std::sync::{Arc, Mutex};

use drupai_token::config::Settings;
use drupai_token::handlers::ConversationEngine;
use drupai_token::models::{CreateTokenRequest, Turn, TurnOutcome};
use drupai_token::services::{DiagnosticSink, MemoryHistory};
use drupai_token::state::MemoryPendingStore;
use drupai_token::storage::{MemoryTokenStore, TokenStore};

/// Diagnostic sink that records every message for assertions
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<(String, String, String)>>,
}

impl RecordingDiagnostics {
    fn push(&self, level: &str, message: &str, source: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level.to_string(), message.to_string(), source.to_string()));
        }
    }

    pub fn messages(&self) -> Vec<(String, String, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _, _)| level == "warning")
            .map(|(_, message, _)| message)
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _, _)| level == "notice")
            .map(|(_, message, _)| message)
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _, _)| level == "error")
            .map(|(_, message, _)| message)
            .collect()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn notice(&self, message: &str, source: &str) {
        self.push("notice", message, source);
    }

    fn warning(&self, message: &str, source: &str) {
        self.push("warning", message, source);
    }

    fn error(&self, message: &str, source: &str) {
        self.push("error", message, source);
    }
}

/// Engine plus handles to its collaborators
pub struct Harness {
    pub engine: ConversationEngine,
    pub store: Arc<MemoryTokenStore>,
    pub diagnostics: Arc<RecordingDiagnostics>,
    pub history: Arc<MemoryHistory>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryTokenStore::new());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let history = Arc::new(MemoryHistory::new());

        let engine = ConversationEngine::new(
            Settings::default(),
            store.clone(),
            Arc::new(MemoryPendingStore::new()),
            diagnostics.clone(),
            history.clone(),
        )
        .expect("engine construction");

        Self {
            engine,
            store,
            diagnostics,
            history,
        }
    }

    /// Seed a token directly into the backing store
    pub async fn seed(&self, id: i64, value: &str) {
        self.store
            .create(CreateTokenRequest {
                id,
                value: value.to_string(),
            })
            .await
            .expect("seed token");
    }

    /// Run one turn for the default test session
    pub async fn turn(&self, text: &str, context: Option<&str>) -> TurnOutcome {
        self.engine
            .process_turn(Turn::new("test-session", text, context.map(str::to_string)))
            .await
            .expect("turn processing")
    }
}
