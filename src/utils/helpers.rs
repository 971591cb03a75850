//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

/// Case-insensitive substring containment test
///
/// Intent keywords are matched as plain substrings, not word-boundary-aware,
/// so "renewal" matches "new". This mirrors how spoken commands arrive from
/// the speech-to-text layer.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
