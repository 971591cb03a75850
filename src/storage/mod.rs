//! Token storage module
//!
//! Persistent token storage belongs to the host; the engine only depends on
//! the [`TokenStore`] seam. An in-memory implementation ships for tests and
//! the demo host.

pub mod memory;

use async_trait::async_trait;

use crate::models::{CreateTokenRequest, Token};
use crate::utils::errors::Result;

pub use memory::MemoryTokenStore;

/// Key-record storage over tokens
///
/// The store does not enforce ID uniqueness: a create with a duplicate ID is
/// permitted, and reads resolve to the earliest-created record for that ID.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Fetch a token by ID, `None` when absent
    async fn get(&self, token_id: i64) -> Result<Option<Token>>;

    /// Fetch all tokens in insertion order
    async fn get_all(&self) -> Result<Vec<Token>>;

    /// Create a new token
    async fn create(&self, request: CreateTokenRequest) -> Result<Token>;

    /// Delete a token by ID; no-op when absent
    async fn delete(&self, token_id: i64) -> Result<()>;
}
