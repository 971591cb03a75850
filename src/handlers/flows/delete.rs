//! Delete flow
//!
//! Single collection stage for the token ID. A missing number terminates
//! the conversation outright; there is no retry here.

use crate::handlers::ConversationEngine;
use crate::models::{Turn, TurnOutcome};
use crate::state::{ContextAction, ConversationContext, STAGE_DONE};
use crate::utils::errors::Result;
use crate::utils::logging;

use super::INVALID_NUMBER_FINAL;

const ASK_ID: &str = "Which token ID would you like to delete?";

/// Initialize the delete flow on a fresh turn
pub(crate) async fn begin(
    engine: &ConversationEngine,
    turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    if engine.command_number(&outcome.text).is_some() {
        resume(engine, turn, outcome).await
    } else {
        outcome.respond(ASK_ID);
        outcome.set_context(
            engine.context_string(&ConversationContext::new(ContextAction::DeleteResponse)),
        );
        Ok(())
    }
}

/// Consume the answer carrying the token ID and perform the deletion
pub(crate) async fn resume(
    engine: &ConversationEngine,
    _turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    match engine.command_number(&outcome.text) {
        Some(token_id) => match engine.store.get(token_id).await? {
            Some(token) => {
                engine.store.delete(token_id).await?;
                logging::log_token_mutation("delete", token_id);

                outcome.respond(format!(
                    "Token ID {} with value: {}. Has been deleted",
                    token_id, token.value
                ));
                outcome.set_context(engine.context_string(
                    &ConversationContext::new(ContextAction::DeleteResponse).with_stage(STAGE_DONE),
                ));
                outcome.close();
            }
            None => {
                engine.diagnostics.warning(
                    &format!("Token ID not found: {}", token_id),
                    engine.namespace(),
                );
                outcome.respond(format!("Sorry, I could not find token ID {}", token_id));
                outcome.close();
            }
        },
        None => {
            engine.diagnostics.warning(
                &format!(
                    "Could not parse number from text in context {}.delete_response: {}",
                    engine.namespace(),
                    outcome.text
                ),
                engine.namespace(),
            );
            outcome.respond(INVALID_NUMBER_FINAL);
            outcome.close();
        }
    }

    Ok(())
}
