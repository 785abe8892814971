//! Knowledge Base - static curated teaching table
//!
//! The knowledge base is built once at startup from compiled-in data,
//! validated, and never mutated afterward. Request handlers share it
//! behind an `Arc` with no locking.

mod entries;

pub use entries::CURATED_ENTRIES;

use crate::types::{Entry, GuideResult};

/// Validated, immutable set of curated teachings.
///
/// Construction fails on configuration errors (no entries, an entry
/// without keywords, no designated fallback), so a `KnowledgeBase` value
/// is always safe to match against.
#[derive(Debug)]
pub struct KnowledgeBase {
    entries: &'static [Entry],
    fallback: usize,
}

impl KnowledgeBase {
    /// Build the knowledge base from the compiled-in curated table.
    pub fn curated() -> GuideResult<Self> {
        Self::from_entries(CURATED_ENTRIES)
    }

    /// Build a knowledge base from an explicit entry table, validating it.
    pub fn from_entries(entries: &'static [Entry]) -> GuideResult<Self> {
        if entries.is_empty() {
            return Err("knowledge base has no entries".into());
        }

        for entry in entries {
            if entry.keywords.is_empty() {
                return Err(format!("entry {} has an empty keyword set", entry.chapter).into());
            }
        }

        let fallback = entries
            .iter()
            .position(|e| e.fallback)
            .ok_or("knowledge base has no designated fallback entry")?;

        Ok(Self { entries, fallback })
    }

    /// All entries in definition order.
    ///
    /// Definition order is the tie-break priority between equally scored
    /// themes, so iteration must never be reordered.
    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// The entry returned when a question carries no keyword signal.
    pub fn fallback_entry(&self) -> &'static Entry {
        &self.entries[self.fallback]
    }

    /// Number of curated teachings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false after validation; kept for the conventional pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
