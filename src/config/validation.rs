//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{DrupaiTokenError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_conversation_config(&settings.conversation)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate conversation configuration
fn validate_conversation_config(config: &super::ConversationConfig) -> Result<()> {
    if config.namespace.is_empty() {
        return Err(DrupaiTokenError::Config(
            "Conversation namespace is required".to_string(),
        ));
    }

    // The namespace is the first dot-delimited context segment
    if config.namespace.contains('.') {
        return Err(DrupaiTokenError::Config(
            "Conversation namespace must not contain '.'".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(DrupaiTokenError::Config(
            "Logging level is required".to_string(),
        ));
    }

    Ok(())
}
