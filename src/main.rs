//! Gita Guide - Binary Entry Point
//!
//! Validates the knowledge base, opens the message store, and serves the
//! HTTP API until interrupted.

use std::env;
use std::sync::Arc;

use gita_guide::api::http::create_router;
use gita_guide::api::state::AppState;
use gita_guide::knowledge_base::KnowledgeBase;
use gita_guide::store::MessageStore;
use gita_guide::types::GuideResult;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> GuideResult<()> {
    // Configuration errors (empty table, no fallback) abort here, before
    // the socket is bound.
    let kb = Arc::new(KnowledgeBase::curated()?);
    eprintln!("[Server] Knowledge base validated: {} teachings", kb.len());

    let store = Arc::new(MessageStore::new());
    eprintln!("[Server] Message history at {}", store.file_path());

    let state = Arc::new(AppState::new(kb, store));
    let app = create_router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    eprintln!("[Server] Listening on 0.0.0.0:{}", port);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut shutdown_tx = Some(shutdown_tx);
    ctrlc::set_handler(move || {
        if let Some(tx) = shutdown_tx.take() {
            let _ = tx.send(());
        }
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            eprintln!("[Server] Shutdown signal received");
        })
        .await?;

    eprintln!("[Server] Shutdown complete");
    Ok(())
}
