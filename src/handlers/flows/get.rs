//! Get flow
//!
//! Reads a single token's value back. Shares the delete flow's numeric
//! contract, including terminating on a missing number.

use crate::handlers::ConversationEngine;
use crate::models::{Turn, TurnOutcome};
use crate::state::{ContextAction, ConversationContext, STAGE_DONE};
use crate::utils::errors::Result;

use super::INVALID_NUMBER_FINAL;

const ASK_ID: &str = "Which token ID would you like to get the value of?";

/// Initialize the get flow on a fresh turn
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
            engine.context_string(&ConversationContext::new(ContextAction::GetResponse)),
        );
        Ok(())
    }
}

/// Consume the answer carrying the token ID and read the value back
pub(crate) async fn resume(
    engine: &ConversationEngine,
    _turn: &Turn,
    outcome: &mut TurnOutcome,
) -> Result<()> {
    match engine.command_number(&outcome.text) {
        Some(token_id) => match engine.store.get(token_id).await? {
            Some(token) => {
                outcome.respond(format!("Token ID {}. Value: {}", token_id, token.value));
                outcome.set_context(engine.context_string(
                    &ConversationContext::new(ContextAction::GetResponse).with_stage(STAGE_DONE),
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
                    "Could not parse number from text in context {}.get_response: {}",
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
