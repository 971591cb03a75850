//! End-to-end conversation flow tests
//!
//! Drives the engine turn by turn the way the host would, threading the
//! context string between turns.

mod common;

use common::Harness;
use drupai_token::storage::TokenStore;

#[tokio::test]
async fn create_flow_end_to_end() {
    let h = Harness::new();

    // Turn 1: no digits in the command, so the engine asks for the ID
    let t1 = h.turn("create token", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("What ID would you like to give this new token?")
    );
    assert_eq!(t1.context.as_deref(), Some("drupai_token.create_response"));
    assert!(!t1.closed);

    // Turn 2: the answer carries the ID
    let t2 = h.turn("42", t1.context.as_deref()).await;
    assert_eq!(
        t2.response.as_deref(),
        Some("What value would you like to give token 42?")
    );
    assert_eq!(
        t2.context.as_deref(),
        Some("drupai_token.create_response.get_value")
    );
    assert!(!t2.closed);

    // Turn 3: the whole answer becomes the value
    let t3 = h.turn("hello", t2.context.as_deref()).await;
    assert_eq!(
        t3.response.as_deref(),
        Some("New token ID 42 created with value: hello")
    );
    assert_eq!(
        t3.context.as_deref(),
        Some("drupai_token.create_response.get_value.done")
    );
    assert!(t3.closed);

    let token = h.store.get(42).await.unwrap().unwrap();
    assert_eq!(token.value, "hello");
}

#[tokio::test]
async fn create_flow_immediate_argument_shortcut() {
    let h = Harness::new();

    // The ID is already in the first utterance, skip straight to the value
    let t1 = h.turn("create new token with id 8", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("What value would you like to give token 8?")
    );
    assert_eq!(
        t1.context.as_deref(),
        Some("drupai_token.create_response.get_value")
    );
    assert!(!t1.closed);

    let t2 = h.turn("my street name", t1.context.as_deref()).await;
    assert!(t2.closed);
    assert_eq!(h.store.get(8).await.unwrap().unwrap().value, "my street name");
}

#[tokio::test]
async fn create_flow_retries_on_missing_number() {
    let h = Harness::new();

    let t1 = h.turn("new token", None).await;
    let t2 = h.turn("err I forget", t1.context.as_deref()).await;

    assert_eq!(
        t2.response.as_deref(),
        Some("Sorry, I need a valid number. Try again")
    );
    // Same stage, conversation still open
    assert_eq!(t2.context.as_deref(), Some("drupai_token.create_response"));
    assert!(!t2.closed);
    assert!(!h.diagnostics.warnings().is_empty());

    // The retry can still succeed
    let t3 = h.turn("12", t2.context.as_deref()).await;
    assert_eq!(
        t3.response.as_deref(),
        Some("What value would you like to give token 12?")
    );
}

#[tokio::test]
async fn create_flow_rejects_empty_value() {
    let h = Harness::new();

    let t1 = h.turn("create token", None).await;
    let t2 = h.turn("7", t1.context.as_deref()).await;
    let t3 = h.turn("   ", t2.context.as_deref()).await;

    assert_eq!(
        t3.response.as_deref(),
        Some("You need to specify a non-empty value, give it another try")
    );
    assert_eq!(
        t3.context.as_deref(),
        Some("drupai_token.create_response.get_value")
    );
    assert!(!t3.closed);

    let t4 = h.turn("now a real value", t3.context.as_deref()).await;
    assert!(t4.closed);
    assert_eq!(h.store.get(7).await.unwrap().unwrap().value, "now a real value");
}

#[tokio::test]
async fn create_flow_recovers_from_lost_pending_state() {
    let h = Harness::new();

    // Jump straight into the value stage without ever saving a pending ID
    let t1 = h
        .turn("some value", Some("drupai_token.create_response.get_value"))
        .await;

    assert_eq!(
        t1.response.as_deref(),
        Some("Sorry, I have lost the token ID. What was it again?")
    );
    // Regressed to the ID-collection stage, conversation still open
    assert_eq!(t1.context.as_deref(), Some("drupai_token.create_response"));
    assert!(!t1.closed);
    assert!(!h.diagnostics.errors().is_empty());

    // The flow completes from there
    let t2 = h.turn("9", t1.context.as_deref()).await;
    let t3 = h.turn("recovered", t2.context.as_deref()).await;
    assert!(t3.closed);
    assert_eq!(h.store.get(9).await.unwrap().unwrap().value, "recovered");
}

#[tokio::test]
async fn update_intent_is_rejected() {
    let h = Harness::new();

    let t1 = h.turn("modify token", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("Simply delete and re-create the token")
    );
    assert!(t1.closed);
    assert!(t1.context.is_none());
}

#[tokio::test]
async fn delete_flow_end_to_end() {
    let h = Harness::new();
    h.seed(5, "Beaujolais").await;

    let t1 = h.turn("remove token", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("Which token ID would you like to delete?")
    );
    assert_eq!(t1.context.as_deref(), Some("drupai_token.delete_response"));
    assert!(!t1.closed);

    let t2 = h.turn("number 5", t1.context.as_deref()).await;
    assert_eq!(
        t2.response.as_deref(),
        Some("Token ID 5 with value: Beaujolais. Has been deleted")
    );
    assert_eq!(
        t2.context.as_deref(),
        Some("drupai_token.delete_response.done")
    );
    assert!(t2.closed);
    assert!(h.store.get(5).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_flow_does_not_retry_on_missing_number() {
    let h = Harness::new();

    let t1 = h.turn("delete token", None).await;
    let t2 = h.turn("umm whichever", t1.context.as_deref()).await;

    assert_eq!(
        t2.response.as_deref(),
        Some(
            "Sorry, I need a valid number. Please ensure the token number does not come \
             immediately after the word token in your command, or else it would be swapped out"
        )
    );
    // Terminates outright, unlike the create flow
    assert!(t2.closed);
}

#[tokio::test]
async fn delete_flow_apologizes_for_unknown_id() {
    let h = Harness::new();

    let t1 = h.turn("delete token", None).await;
    let t2 = h.turn("7", t1.context.as_deref()).await;

    assert_eq!(t2.response.as_deref(), Some("Sorry, I could not find token ID 7"));
    assert!(t2.closed);
    assert!(h
        .diagnostics
        .warnings()
        .iter()
        .any(|w| w.contains("Token ID not found: 7")));
}

#[tokio::test]
async fn deleting_nonexistent_id_is_not_fatal_and_second_delete_is_noop() {
    let h = Harness::new();
    h.seed(3, "x").await;

    h.store.delete(3).await.unwrap();
    h.store.delete(3).await.unwrap();

    assert!(h.store.get(3).await.unwrap().is_none());
    assert!(h.store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_flow_end_to_end() {
    let h = Harness::new();
    h.seed(3, "testing").await;

    let t1 = h.turn("which token was it", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("Which token ID would you like to get the value of?")
    );
    assert_eq!(t1.context.as_deref(), Some("drupai_token.get_response"));

    let t2 = h.turn("3", t1.context.as_deref()).await;
    assert_eq!(t2.response.as_deref(), Some("Token ID 3. Value: testing"));
    assert_eq!(t2.context.as_deref(), Some("drupai_token.get_response.done"));
    assert!(t2.closed);
}

#[tokio::test]
async fn get_flow_immediate_argument() {
    let h = Harness::new();
    h.seed(6, "the long phrase").await;

    // "token number 6" dodges the substitution pattern on purpose
    let t1 = h.turn("get token number 6", None).await;
    assert_eq!(t1.response.as_deref(), Some("Token ID 6. Value: the long phrase"));
    assert!(t1.closed);
}

#[tokio::test]
async fn get_flow_apologizes_for_unknown_id() {
    let h = Harness::new();

    let t1 = h.turn("get token number 99", None).await;
    assert_eq!(t1.response.as_deref(), Some("Sorry, I could not find token ID 99"));
    assert!(t1.closed);
}

#[tokio::test]
async fn list_flow_with_no_tokens() {
    let h = Harness::new();

    let t1 = h.turn("list tokens", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("Listing available tokens: No available tokens")
    );
    assert_eq!(t1.context.as_deref(), Some("drupai_token.list_response.done"));
    assert!(t1.closed);
}

#[tokio::test]
async fn list_flow_with_two_tokens() {
    let h = Harness::new();
    h.seed(1, "a").await;
    h.seed(2, "b").await;

    let t1 = h.turn("list tokens", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("Listing available tokens: ID: 1. Value: a. ID: 2. Value: b")
    );
    assert!(t1.closed);
}

#[tokio::test]
async fn intent_priority_create_wins_over_delete() {
    let h = Harness::new();

    let t1 = h.turn("new token please delete", None).await;
    assert_eq!(
        t1.response.as_deref(),
        Some("What ID would you like to give this new token?")
    );
}

#[tokio::test]
async fn token_keyword_without_action_is_a_noop_turn() {
    let h = Harness::new();

    let t1 = h.turn("token please", None).await;
    assert!(t1.response.is_none());
    assert!(t1.context.is_none());
    assert!(!t1.closed);
    assert!(h
        .diagnostics
        .notices()
        .iter()
        .any(|n| n.contains("no action specified")));
}
