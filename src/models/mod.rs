//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod token;
pub mod turn;

// Re-export commonly used models
pub use token::{CreateTokenRequest, Token};
pub use turn::{Turn, TurnOutcome};
