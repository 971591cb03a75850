//! Create flow
//!
//! Two collection stages: first the token ID, then the value. The ID
//! collected in stage 1 is parked in the session-keyed pending store so it
//! survives to the next turn. Unlike get/delete, a bad number here
//! re-prompts in the same stage rather than ending the conversation.

use crate::handlers::ConversationEngine;
use crate::models::{CreateTokenRequest, Turn, TurnOutcome};
use crate::state::{ContextAction, ConversationContext, STAGE_DONE, STAGE_GET_VALUE};
use crate::utils::errors::Result;
use crate::utils::logging;

const ASK_ID: &str = "What ID would you like to give this new token?";
const INVALID_NUMBER_RETRY: &str = "Sorry, I need a valid number. Try again";
const LOST_ID: &str = "Sorry, I have lost the token ID. What was it again?";
const EMPTY_VALUE: &str = "You need to specify a non-empty value, give it another try";

/// Initialize the create flow on a fresh turn
///
/// When the utterance already carries a number ("new token with id 8") the
/// ID-collection stage is skipped entirely.
pub(crate) async fn begin(
    engine: &ConversationEngine,
    turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    if engine.command_number(&outcome.text).is_some() {
        collect_id(engine, turn, outcome).await
    } else {
        outcome.respond(ASK_ID);
        outcome.set_context(
            engine.context_string(&ConversationContext::new(ContextAction::CreateResponse)),
        );
        Ok(())
    }
}

/// Resume the create flow with the next answer
pub(crate) async fn resume(
    engine: &ConversationEngine,
    context: &ConversationContext,
    turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    if context.has_stage(STAGE_GET_VALUE) {
        collect_value(engine, turn, outcome).await
    } else {
        collect_id(engine, turn, outcome).await
    }
}

/// Stage 1: expect a number somewhere in the answer to become the token ID
async fn collect_id(
    engine: &ConversationEngine,
    turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    match engine.command_number(&outcome.text) {
        Some(token_id) => {
            // Park the ID until the conversation produces the value.
            engine
                .pending
                .save_pending_id(&turn.session_id, token_id)
                .await?;
            outcome.respond(format!(
                "What value would you like to give token {}?",
                token_id
            ));
            outcome.set_context(engine.context_string(
                &ConversationContext::new(ContextAction::CreateResponse).with_stage(STAGE_GET_VALUE),
            ));
        }
        None => {
            engine.diagnostics.warning(
                &format!(
                    "Could not parse number from text in context {}.create_response: {}",
                    engine.namespace(),
                    outcome.text
                ),
                engine.namespace(),
            );
            // Same stage, conversation stays open for another try.
            outcome.respond(INVALID_NUMBER_RETRY);
        }
    }

    Ok(())
}

/// Stage 2: the whole answer text becomes the new token's value
async fn collect_value(
    engine: &ConversationEngine,
    turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    let pending = engine.pending.load_pending_id(&turn.session_id).await?;

    let Some(token_id) = pending else {
        // Degraded but recoverable: regress to the ID-collection stage.
        engine.diagnostics.error(
            "Lost the token ID from previous interaction, aborting creation of token",
            engine.namespace(),
        );
        outcome.respond(LOST_ID);
        outcome.set_context(
            engine.context_string(&ConversationContext::new(ContextAction::CreateResponse)),
        );
        return Ok(());
    };

    let value = outcome.text.clone();
    if value.trim().is_empty() {
        engine.diagnostics.warning(
            &format!(
                "Empty value found when trying to create new token ID {}",
                token_id
            ),
            engine.namespace(),
        );
        // Stay in the value-collection stage.
        outcome.respond(EMPTY_VALUE);
        return Ok(());
    }

    engine
        .store
        .create(CreateTokenRequest {
            id: token_id,
            value: value.clone(),
        })
        .await?;
    engine.pending.clear_pending_id(&turn.session_id).await?;
    logging::log_token_mutation("create", token_id);

    outcome.respond(format!(
        "New token ID {} created with value: {}",
        token_id, value
    ));
    outcome.set_context(
        engine.context_string(
            &ConversationContext::new(ContextAction::CreateResponse)
                .with_stage(STAGE_GET_VALUE)
                .with_stage(STAGE_DONE),
        ),
    );
    outcome.close();

    Ok(())
}
