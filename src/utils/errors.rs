//! Error handling for drupai-token
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy. Conversation-level
//! failures never escape a turn as errors: handlers translate them into
//! response text plus diagnostics and an explicit closed flag.

use thiserror::Error;

/// Main error type for drupai-token
#[derive(Error, Debug)]
pub enum DrupaiTokenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: i64 },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Lost pending token ID between turns")]
    LostPendingState,

    #[error("Unknown conversation context: {0}")]
    UnknownContext(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for drupai-token operations
pub type Result<T> = std::result::Result<T, DrupaiTokenError>;

impl DrupaiTokenError {
    /// Check if the error is recoverable within the conversation
    pub fn is_recoverable(&self) -> bool {
        match self {
            DrupaiTokenError::Config(_) => false,
            DrupaiTokenError::TokenNotFound { .. } => true,
            DrupaiTokenError::MalformedInput(_) => true,
            DrupaiTokenError::LostPendingState => true,
            DrupaiTokenError::UnknownContext(_) => false,
            DrupaiTokenError::InvalidInput(_) => false,
            DrupaiTokenError::Storage(_) => false,
            DrupaiTokenError::Serialization(_) => false,
            DrupaiTokenError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrupaiTokenError::Config(_) => ErrorSeverity::Critical,
            DrupaiTokenError::Storage(_) => ErrorSeverity::Critical,
            DrupaiTokenError::UnknownContext(_) => ErrorSeverity::Warning,
            DrupaiTokenError::TokenNotFound { .. } => ErrorSeverity::Warning,
            DrupaiTokenError::MalformedInput(_) => ErrorSeverity::Info,
            DrupaiTokenError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
