//! Update flow
//!
//! Update is not a first-class operation; tokens are never edited in place.

use crate::models::TurnOutcome;

const UPDATE_UNSUPPORTED: &str = "Simply delete and re-create the token";

/// Reject the update intent and close the conversation
pub(crate) fn begin(outcome: &mut TurnOutcome) {
    outcome.respond(UPDATE_UNSUPPORTED);
    outcome.close();
}
