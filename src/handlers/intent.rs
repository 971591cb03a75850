//! Intent classification for fresh turns
//!
//! Keyword-containment tests in a fixed priority order, first match wins.
//! Containment is a case-insensitive substring test, not word-boundary
//! aware, because the text arrives from a speech handler with no reliable
//! word segmentation.

use crate::utils::helpers::contains_ignore_case;

/// Recognized command intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Update,
    Delete,
    List,
    Get,
}

/// Classify an utterance
///
/// Priority order matters and is part of the contract: a turn containing
/// both "new" and "delete" resolves to [`Intent::Create`].
pub fn classify(text: &str) -> Option<Intent> {
    let contains = |keyword: &str| contains_ignore_case(text, keyword);

    if contains("create") || contains("new") {
        Some(Intent::Create)
    } else if contains("update") || contains("edit") || contains("modify") {
        Some(Intent::Update)
    } else if contains("delete") || contains("remove") {
        Some(Intent::Delete)
    } else if contains("list") || contains("enumerate") || contains("tokens") {
        Some(Intent::List)
    } else if contains("get") || contains("which") || contains("what") {
        Some(Intent::Get)
    } else {
        None
    }
}
