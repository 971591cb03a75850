//! State management module
//!
//! This module handles the serialized conversation context and the
//! cross-turn pending-creation slot

pub mod context;
pub mod storage;

// Re-export commonly used state components
pub use context::{ContextAction, ConversationContext, STAGE_DONE, STAGE_GET_VALUE};
pub use storage::{MemoryPendingStore, PendingStore};
