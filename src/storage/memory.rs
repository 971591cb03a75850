//! In-memory token store
//!
//! Backing store for tests and the demo host. Tokens live in a plain vector
//! so insertion order is preserved and duplicate IDs behave like the backing
//! store of the web UI: reads return the earliest-created record, delete
//! removes that same record.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{CreateTokenRequest, Token};
use crate::utils::errors::Result;

use super::TokenStore;

/// Vector-backed token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Vec<Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, token_id: i64) -> Result<Option<Token>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.iter().find(|t| t.id == token_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Token>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.clone())
    }

    async fn create(&self, request: CreateTokenRequest) -> Result<Token> {
        let token = Token {
            id: request.id,
            value: request.value,
            created_at: Utc::now(),
        };

        let mut tokens = self.tokens.write().await;
        tokens.push(token.clone());
        debug!(token_id = token.id, "Token created in memory store");

        Ok(token)
    }

    async fn delete(&self, token_id: i64) -> Result<()> {
        let mut tokens = self.tokens.write().await;
        if let Some(position) = tokens.iter().position(|t| t.id == token_id) {
            tokens.remove(position);
            debug!(token_id = token_id, "Token deleted from memory store");
        } else {
            debug!(token_id = token_id, "No token to delete");
        }

        Ok(())
    }
}
