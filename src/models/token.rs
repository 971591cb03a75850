//! Token model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A caller-named integer ID mapped to an arbitrary string value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Caller-supplied identifier, not auto-generated
    pub id: i64,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTokenRequest {
    pub id: i64,
    pub value: String,
}
