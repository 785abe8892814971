//! Data types for the Gita Guide service
//!
//! This module contains the core data structures used throughout the application.

mod entry;
mod message;

pub use entry::Entry;
pub use message::{Message, MessageMeta, Role};

/// Result type for service operations
pub type GuideResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
