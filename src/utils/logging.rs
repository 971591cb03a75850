//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the drupai-token crate.

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the non-blocking writer guard when a log file is configured;
/// the caller must keep it alive for the duration of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = if let Some(file_path) = &config.file_path {
        let file_appender = tracing_appender::rolling::daily(file_path, "drupai-token.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a processed conversation turn with structured data
pub fn log_turn(session_id: &str, action: &str, closed: bool, context: Option<&str>) {
    info!(
        session_id = session_id,
        action = action,
        closed = closed,
        context = context,
        "Conversation turn processed"
    );
}

/// Log token substitution results
pub fn log_substitution(session_id: &str, matches: usize, resolved: usize) {
    if matches > 0 {
        info!(
            session_id = session_id,
            matches = matches,
            resolved = resolved,
            "Token references substituted"
        );
    } else {
        debug!(session_id = session_id, "No token references in text");
    }
}

/// Log token store mutations
pub fn log_token_mutation(operation: &str, token_id: i64) {
    info!(
        operation = operation,
        token_id = token_id,
        "Token store mutation"
    );
}

/// Log an abandoned or errored conversation turn
pub fn log_turn_failure(session_id: &str, reason: &str) {
    warn!(
        session_id = session_id,
        reason = reason,
        "Conversation turn failed"
    );
}
