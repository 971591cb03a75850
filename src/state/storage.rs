//! Pending-state storage
//!
//! The create flow collects the token ID one turn before the value. That
//! single scalar must survive between the two turns even though the engine
//! keeps no in-memory state per conversation, so it lives in an injected
//! store keyed by session ID. Keying by session (rather than one global
//! slot) keeps simultaneous create flows in different conversations from
//! clobbering each other.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::utils::errors::Result;

/// Durable slot for the token ID pending creation
#[async_trait]
pub trait PendingStore: Send + Sync {
    async fn save_pending_id(&self, session_id: &str, token_id: i64) -> Result<()>;

    async fn load_pending_id(&self, session_id: &str) -> Result<Option<i64>>;

    async fn clear_pending_id(&self, session_id: &str) -> Result<()>;
}

/// In-memory pending store for tests and the demo host
#[derive(Debug, Default)]
pub struct MemoryPendingStore {
    slots: RwLock<HashMap<String, i64>>,
}

impl MemoryPendingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PendingStore for MemoryPendingStore {
    async fn save_pending_id(&self, session_id: &str, token_id: i64) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.insert(session_id.to_string(), token_id);
        debug!(session_id = session_id, token_id = token_id, "Pending token ID saved");
        Ok(())
    }

    async fn load_pending_id(&self, session_id: &str) -> Result<Option<i64>> {
        let slots = self.slots.read().await;
        Ok(slots.get(session_id).copied())
    }

    async fn clear_pending_id(&self, session_id: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        if slots.remove(session_id).is_some() {
            debug!(session_id = session_id, "Pending token ID cleared");
        }
        Ok(())
    }
}
