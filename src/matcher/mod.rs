//! Teaching selection engine
//!
//! Maps a free-text question to the single best-matching curated entry:
//! tokenizer → synonym expansion → scored linear scan → fallback policy.
//!
//! Selection is a pure function of the question and the static tables.
//! It performs no I/O, holds no locks, and is safe to call from any
//! number of request handlers concurrently.

mod synonyms;
mod tokenizer;

pub use synonyms::{expand, SYNONYM_TABLE};
pub use tokenizer::{tokenize, STOPWORDS};

use std::collections::HashSet;

use crate::knowledge_base::KnowledgeBase;
use crate::types::Entry;

/// Keywords must be longer than this to earn substring credit; short
/// keywords collide with too many unrelated words.
const PARTIAL_MIN_KEYWORD_LEN: usize = 4;

/// Score one entry against the expanded query set.
///
/// Exact credit counts keywords present in the set verbatim; partial
/// credit counts (keyword, query word) pairs where a long keyword occurs
/// inside a query word, e.g. "surrender" inside "surrendering".
fn score(entry: &Entry, query: &HashSet<String>) -> usize {
    let exact = entry
        .keywords
        .iter()
        .filter(|&&k| query.contains(k))
        .count();

    let partial = entry
        .keywords
        .iter()
        .filter(|k| k.len() > PARTIAL_MIN_KEYWORD_LEN)
        .map(|&k| query.iter().filter(|w| w.contains(k)).count())
        .sum::<usize>();

    exact + partial
}

/// Select the best-matching teaching for a question.
///
/// Entries are scanned in knowledge-base definition order with a strict
/// greater-than comparison, so the earlier of two equally scored entries
/// wins. A best score of zero means the question carried no keyword
/// signal at all; the designated fallback entry is returned instead of
/// whichever entry happened to be scanned first.
pub fn select_teaching(question: &str, kb: &KnowledgeBase) -> &'static Entry {
    let words = tokenize(question);
    let query = expand(&words);

    let mut best: Option<&'static Entry> = None;
    let mut best_score = 0usize;

    for entry in kb.entries() {
        let entry_score = score(entry, &query);
        if best.is_none() || entry_score > best_score {
            best = Some(entry);
            best_score = entry_score;
        }
    }

    match best {
        Some(entry) if best_score > 0 => entry,
        _ => kb.fallback_entry(),
    }
}
