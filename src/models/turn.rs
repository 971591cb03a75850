//! Turn model
//!
//! One user utterance plus its processing result. The turn value is threaded
//! explicitly through every pipeline stage instead of mutating a shared
//! ambient event object; the host owns persistence of the context string
//! between turns.

use serde::{Deserialize, Serialize};

/// One incoming user utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Conversation/session identifier supplied by the host; scopes the
    /// pending-creation slot so parallel conversations cannot clobber
    /// each other
    pub session_id: String,
    /// Raw text as produced by the speech-to-text layer
    pub text: String,
    /// Serialized conversation context returned by the previous turn,
    /// absent on a fresh turn
    pub context: Option<String>,
}

impl Turn {
    pub fn new(session_id: impl Into<String>, text: impl Into<String>, context: Option<String>) -> Self {
        Self {
            session_id: session_id.into(),
            text: text.into(),
            context,
        }
    }
}

/// Result of processing one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Canonical turn text after token substitution; always rewritten,
    /// even when the engine otherwise ignores the turn
    pub text: String,
    /// Natural-language response to speak/display, if any
    pub response: Option<String>,
    /// Context string to hand back on the next turn
    pub context: Option<String>,
    /// Whether the conversation is closed; an open conversation expects
    /// exactly one more turn
    pub closed: bool,
}

impl TurnOutcome {
    /// Pass-through outcome carrying the rewritten text and the prior context
    pub(crate) fn pass_through(text: String, context: Option<String>) -> Self {
        Self {
            text,
            response: None,
            context,
            closed: false,
        }
    }

    pub(crate) fn respond(&mut self, response: impl Into<String>) {
        self.response = Some(response.into());
    }

    pub(crate) fn set_context(&mut self, context: String) {
        self.context = Some(context);
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}
