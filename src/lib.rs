//! Gita Guide teaching service
//!
//! A small HTTP service that answers free-text questions with a
//! thematically matched Bhagavad-gītā teaching, using pure Rust with
//! minimal dependencies.
//!
//! # Features
//!
//! - **Curated Knowledge Base**: Nine theme entries, validated at startup
//! - **Keyword Matcher**: Tokenization, synonym expansion, scored
//!   selection with a deterministic fallback
//! - **Conversation History**: Append-only JSONL message store
//! - **HTTP API**: Axum endpoints for asking, history, and diagnostics
//!
//! # Modules
//!
//! - `types`: Core data structures (Entry, Message)
//! - `knowledge_base`: The static curated table with startup validation
//! - `matcher`: Tokenizer, synonym expansion, and teaching selection
//! - `store`: Conversation history persistence
//! - `api`: Axum router, handlers, and shared state
//!
//! # Example
//!
//! ```
//! use gita_guide::{select_teaching, KnowledgeBase};
//!
//! let kb = KnowledgeBase::curated().unwrap();
//! let teaching = select_teaching("I am stressed about my job", &kb);
//! assert_eq!(teaching.chapter, "2.47");
//! ```

pub mod api;
pub mod knowledge_base;
pub mod matcher;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::state::AppState;
pub use knowledge_base::KnowledgeBase;
pub use matcher::select_teaching;
pub use store::MessageStore;
pub use types::{Entry, GuideResult, Message, MessageMeta, Role};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
