//! Shared application state

use std::sync::Arc;

use crate::knowledge_base::KnowledgeBase;
use crate::store::MessageStore;

/// State shared by all request handlers.
///
/// The knowledge base is immutable after startup, so handlers read it
/// without locking; the store serializes its own writes internally.
pub struct AppState {
    /// The validated curated teaching table
    pub kb: Arc<KnowledgeBase>,

    /// Conversation history store
    pub store: Arc<MessageStore>,
}

impl AppState {
    pub fn new(kb: Arc<KnowledgeBase>, store: Arc<MessageStore>) -> Self {
        Self { kb, store }
    }
}
