//! Drupai Token demo host
//!
//! Minimal stand-in for the Drupai dispatch framework: drives the
//! conversation engine from stdin, printing rewritten text and responses
//! and threading the context string between turns.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use drupai_token::{
    config::Settings,
    handlers::ConversationEngine,
    models::Turn,
    services::{TracingDiagnostics, TracingHistory},
    state::MemoryPendingStore,
    storage::MemoryTokenStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; a missing config file falls back to defaults
    let settings = Settings::new().unwrap_or_default();
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} demo host...", drupai_token::info());

    let engine = ConversationEngine::new(
        settings,
        Arc::new(MemoryTokenStore::new()),
        Arc::new(MemoryPendingStore::new()),
        Arc::new(TracingDiagnostics::new()),
        Arc::new(TracingHistory::new()),
    )?;

    println!("Speak to the token manager (try \"create new token\", \"list tokens\"); Ctrl-D exits.");

    let stdin = io::stdin();
    let mut context: Option<String> = None;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches('\n');

        let turn = Turn::new("local", text, context.clone());
        let outcome = engine.process_turn(turn).await?;

        if outcome.text != text {
            println!("(heard: {})", outcome.text);
        }
        if let Some(response) = &outcome.response {
            println!("{}", response);
        }

        context = if outcome.closed { None } else { outcome.context };
    }

    info!("Demo host shut down");
    Ok(())
}
