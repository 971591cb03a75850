//! Conversation context management
//!
//! The context string is the only state the host carries between turns:
//! a dot-delimited sequence `<namespace>.<action>[.<stage>...]` such as
//! `drupai_token.create_response.get_value`. It is parsed once here at the
//! boundary into a structured value; handlers dispatch on the structure,
//! never on raw string fragments.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{DrupaiTokenError, Result};

/// Stage segment appended when the create flow is collecting the value
pub const STAGE_GET_VALUE: &str = "get_value";

/// Stage segment marking a completed flow
pub const STAGE_DONE: &str = "done";

/// Action encoded as the second context segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextAction {
    CreateResponse,
    DeleteResponse,
    GetResponse,
    ListResponse,
}

impl ContextAction {
    pub fn as_segment(&self) -> &'static str {
        match self {
            ContextAction::CreateResponse => "create_response",
            ContextAction::DeleteResponse => "delete_response",
            ContextAction::GetResponse => "get_response",
            ContextAction::ListResponse => "list_response",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "create_response" => Some(ContextAction::CreateResponse),
            "delete_response" => Some(ContextAction::DeleteResponse),
            "get_response" => Some(ContextAction::GetResponse),
            "list_response" => Some(ContextAction::ListResponse),
            _ => None,
        }
    }
}

/// Structured conversation context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub action: ContextAction,
    /// Trailing segments after the action. Known values are `get_value` and
    /// `done`; unknown segments are carried opaquely and re-serialized as-is.
    stages: Vec<String>,
}

impl ConversationContext {
    pub fn new(action: ContextAction) -> Self {
        Self {
            action,
            stages: Vec::new(),
        }
    }

    /// Append a stage segment
    pub fn with_stage(mut self, stage: &str) -> Self {
        self.stages.push(stage.to_string());
        self
    }

    /// Check whether the raw context string belongs to this namespace
    pub fn belongs_to(raw: &str, namespace: &str) -> bool {
        raw.split('.').next() == Some(namespace)
    }

    /// Parse a raw context string
    ///
    /// Fails with [`DrupaiTokenError::UnknownContext`] when the namespace
    /// does not match or the action segment names no known handler.
    pub fn parse(raw: &str, namespace: &str) -> Result<Self> {
        let mut segments = raw.split('.');

        if segments.next() != Some(namespace) {
            return Err(DrupaiTokenError::UnknownContext(raw.to_string()));
        }

        let action = segments
            .next()
            .and_then(ContextAction::from_segment)
            .ok_or_else(|| DrupaiTokenError::UnknownContext(raw.to_string()))?;

        Ok(Self {
            action,
            stages: segments.map(str::to_string).collect(),
        })
    }

    /// Serialize back to the dot-joined wire form
    pub fn serialize(&self, namespace: &str) -> String {
        let mut out = format!("{}.{}", namespace, self.action.as_segment());
        for stage in &self.stages {
            out.push('.');
            out.push_str(stage);
        }
        out
    }

    pub fn has_stage(&self, stage: &str) -> bool {
        self.stages.iter().any(|s| s == stage)
    }

    pub fn is_done(&self) -> bool {
        self.has_stage(STAGE_DONE)
    }
}
