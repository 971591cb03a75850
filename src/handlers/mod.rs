//! Conversation handlers module
//!
//! This module contains the conversation engine and the per-flow handlers:
//! - the text-substitution pass that always runs first,
//! - the intent router for fresh turns,
//! - the context resumer dispatching follow-up answers to their flow.

pub mod flows;
pub mod intent;
pub mod substitution;

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::config::Settings;
use crate::models::{Turn, TurnOutcome};
use crate::services::{DiagnosticSink, InteractionHistory};
use crate::state::{ContextAction, ConversationContext, PendingStore};
use crate::storage::TokenStore;
use crate::utils::errors::{DrupaiTokenError, Result};
use crate::utils::{helpers, logging};

use intent::Intent;

/// Response produced when a context string names no known handler
pub const GENERIC_ERROR_RESPONSE: &str = "An error occured, please see the logs for more details";

/// Keyword that makes a fresh turn concern this engine at all
const CONCERN_KEYWORD: &str = "token";

/// The conversation engine
///
/// One instance serves any number of conversations; per-conversation state is
/// limited to the context string the host threads between turns and the
/// session-keyed pending-creation slot.
pub struct ConversationEngine {
    pub(crate) settings: Settings,
    pub(crate) store: Arc<dyn TokenStore>,
    pub(crate) pending: Arc<dyn PendingStore>,
    pub(crate) diagnostics: Arc<dyn DiagnosticSink>,
    pub(crate) history: Arc<dyn InteractionHistory>,
    pub(crate) token_pattern: Regex,
    number_pattern: Regex,
}

impl ConversationEngine {
    /// Create a new engine over the injected stores and sinks
    pub fn new(
        settings: Settings,
        store: Arc<dyn TokenStore>,
        pending: Arc<dyn PendingStore>,
        diagnostics: Arc<dyn DiagnosticSink>,
        history: Arc<dyn InteractionHistory>,
    ) -> Result<Self> {
        let token_pattern = Regex::new(r"(?i)token\s+([0-9]+)")
            .map_err(|e| DrupaiTokenError::Config(format!("Invalid token pattern: {}", e)))?;
        let number_pattern = Regex::new(r"[0-9]+")
            .map_err(|e| DrupaiTokenError::Config(format!("Invalid number pattern: {}", e)))?;

        Ok(Self {
            settings,
            store,
            pending,
            diagnostics,
            history,
            token_pattern,
            number_pattern,
        })
    }

    pub(crate) fn namespace(&self) -> &str {
        &self.settings.conversation.namespace
    }

    /// Extract the first integer literal usable as a command argument
    ///
    /// Zero is rejected: a spoken "token 0" was never a valid command
    /// argument in the reference behavior, and overlong digit runs that do
    /// not fit an i64 are treated as absent.
    pub(crate) fn command_number(&self, text: &str) -> Option<i64> {
        self.number_pattern
            .find(text)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .filter(|n| *n != 0)
    }

    /// Serialize a context for this engine's namespace
    pub(crate) fn context_string(&self, context: &ConversationContext) -> String {
        context.serialize(self.namespace())
    }

    /// Process one conversation turn
    ///
    /// Substitution always runs first and unconditionally rewrites the turn
    /// text; the intent router or the context resumer then runs depending on
    /// whether a prior context of ours is present.
    pub async fn process_turn(&self, turn: Turn) -> Result<TurnOutcome> {
        let rewritten = if self.settings.features.text_substitution {
            substitution::rewrite(self, &turn.session_id, &turn.text).await?
        } else {
            turn.text.clone()
        };

        let mut outcome = TurnOutcome::pass_through(rewritten, turn.context.clone());

        let prior = turn
            .context
            .as_deref()
            .filter(|raw| ConversationContext::belongs_to(raw, self.namespace()));

        // Don't take action if the conversation does not concern us.
        let concerns_us = prior.is_some()
            || helpers::contains_ignore_case(&outcome.text, CONCERN_KEYWORD);
        if !concerns_us {
            debug!(session_id = %turn.session_id, "Turn does not concern the token engine");
            return Ok(outcome);
        }

        let dispatched = match prior {
            None => self.route_intent(&turn, &mut outcome).await,
            Some(raw) => self.resume_context(raw, &turn, &mut outcome).await,
        };
        if let Err(e) = dispatched {
            logging::log_turn_failure(&turn.session_id, &e.to_string());
            return Err(e);
        }

        logging::log_turn(
            &turn.session_id,
            if turn.context.is_some() { "resume" } else { "route" },
            outcome.closed,
            outcome.context.as_deref(),
        );

        Ok(outcome)
    }

    /// Classify a fresh turn and invoke the matching flow initializer
    async fn route_intent(&self, turn: &Turn, outcome: &mut TurnOutcome) -> Result<()> {
        match intent::classify(&outcome.text) {
            Some(Intent::Create) => flows::create::begin(self, turn, outcome).await,
            Some(Intent::Update) => {
                flows::update::begin(outcome);
                Ok(())
            }
            Some(Intent::Delete) => flows::delete::begin(self, turn, outcome).await,
            Some(Intent::List) => flows::list::begin(self, outcome).await,
            Some(Intent::Get) => flows::get::begin(self, turn, outcome).await,
            None => {
                self.diagnostics.notice(
                    "String \"token\" found but no action specified",
                    self.namespace(),
                );
                Ok(())
            }
        }
    }

    /// Dispatch a resumed turn to the response handler its context names
    async fn resume_context(&self, raw: &str, turn: &Turn, outcome: &mut TurnOutcome) -> Result<()> {
        let context = match ConversationContext::parse(raw, self.namespace()) {
            Ok(context) => context,
            Err(_) => {
                self.fail_unknown_context(raw, outcome);
                return Ok(());
            }
        };

        match context.action {
            ContextAction::CreateResponse => {
                flows::create::resume(self, &context, turn, outcome).await
            }
            ContextAction::DeleteResponse => flows::delete::resume(self, turn, outcome).await,
            ContextAction::GetResponse => flows::get::resume(self, turn, outcome).await,
            // List has no follow-up stage; a resumed list context is a
            // host bug and is treated like any unknown context.
            ContextAction::ListResponse => {
                self.fail_unknown_context(raw, outcome);
                Ok(())
            }
        }
    }

    /// Fatal-for-this-turn: generic error response, conversation closed
    fn fail_unknown_context(&self, raw: &str, outcome: &mut TurnOutcome) {
        self.diagnostics.warning(
            &format!("Unknown {} context encountered: {}", self.namespace(), raw),
            self.namespace(),
        );
        outcome.respond(GENERIC_ERROR_RESPONSE);
        outcome.close();
    }
}
