//! List flow
//!
//! Immediate: enumerates every stored token in one response, no pagination
//! and no follow-up question, so the conversation closes with the response.

use crate::handlers::ConversationEngine;
use crate::models::TurnOutcome;
use crate::state::{ContextAction, ConversationContext, STAGE_DONE};
use crate::utils::errors::Result;

/// Enumerate all tokens
pub(crate) async fn begin(engine: &ConversationEngine, outcome: &mut TurnOutcome) -> Result<()> {
    let tokens = engine.store.get_all().await?;

    let body = if tokens.is_empty() {
        "No available tokens".to_string()
    } else {
        tokens
            .iter()
            .map(|token| format!("ID: {}. Value: {}", token.id, token.value))
            .collect::<Vec<_>>()
            .join(". ")
    };

    outcome.respond(format!("Listing available tokens: {}", body));
    outcome.set_context(engine.context_string(
        &ConversationContext::new(ContextAction::ListResponse).with_stage(STAGE_DONE),
    ));
    outcome.close();

    Ok(())
}
