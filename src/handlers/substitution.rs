//! Token reference substitution
//!
//! Scans the raw turn text for `token N` references and swaps each one for
//! its stored value before any routing happens. The match list is computed
//! from the pristine input and never re-scanned after a partial
//! substitution, so a value that itself contains a token reference cannot
//! trigger cascading rewrites of its own matches.

use regex::{NoExpand, Regex};

use crate::services::AFTER_READY_TEXT;
use crate::utils::errors::{DrupaiTokenError, Result};
use crate::utils::logging;

use super::ConversationEngine;

/// Rewrite `token N` references in `raw`, returning the canonical turn text
///
/// Each resolving match is replaced with a case-insensitive replace-all of
/// the exact matched span, so distinct spans with the same ID are each
/// replaced independently and consistently. Unresolvable references are
/// left untouched and reported as warnings; the rewritten text is appended
/// to the interaction history whenever at least one reference was found.
pub(crate) async fn rewrite(
    engine: &ConversationEngine,
    session_id: &str,
    raw: &str,
) -> Result<String> {
    let matches: Vec<(String, String)> = engine
        .token_pattern
        .captures_iter(raw)
        .filter_map(|captures| {
            let span = captures.get(0)?.as_str().to_string();
            let digits = captures.get(1)?.as_str().to_string();
            Some((span, digits))
        })
        .collect();

    if matches.is_empty() {
        logging::log_substitution(session_id, 0, 0);
        return Ok(raw.to_string());
    }

    let mut text = raw.to_string();
    let mut resolved = 0;

    for (span, digits) in &matches {
        let token_id: i64 = match digits.parse() {
            Ok(id) => id,
            Err(_) => {
                // Digit run too long for an ID; skip this occurrence.
                engine.diagnostics.warning(
                    &format!("Token ID not parseable: {}", digits),
                    engine.namespace(),
                );
                continue;
            }
        };

        match engine.store.get(token_id).await? {
            Some(token) => {
                let span_pattern = Regex::new(&format!("(?i){}", regex::escape(span)))
                    .map_err(|e| {
                        DrupaiTokenError::Config(format!("Invalid span pattern: {}", e))
                    })?;
                text = span_pattern
                    .replace_all(&text, NoExpand(&token.value))
                    .into_owned();
                resolved += 1;
            }
            None => {
                engine.diagnostics.warning(
                    &format!("Token ID not found: {}", token_id),
                    engine.namespace(),
                );
            }
        }
    }

    logging::log_substitution(session_id, matches.len(), resolved);

    // The rewritten text overwrites the canonical turn text; mirror it into
    // the host's interaction history under the fixed event label.
    engine
        .history
        .record(&text, engine.namespace(), AFTER_READY_TEXT);

    Ok(text)
}
