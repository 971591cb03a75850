//! Drupai Token
//!
//! Voice/text-driven token manager for the Drupai conversational assistant.
//! This library provides the text-substitution pass that rewrites `token N`
//! references into stored values, and the multi-turn conversation engine that
//! lets a user create, read, list, and delete tokens by speaking or typing
//! natural commands across several turns.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{DrupaiTokenError, Result};

// Re-export main components for easy access
pub use handlers::ConversationEngine;
pub use models::{Token, Turn, TurnOutcome};
pub use services::{DiagnosticSink, InteractionHistory, TracingDiagnostics, TracingHistory};
pub use state::{ContextAction, ConversationContext, MemoryPendingStore, PendingStore};
pub use storage::{MemoryTokenStore, TokenStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
