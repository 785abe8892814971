//! Synonym dictionary for query expansion
//!
//! The table is stored asymmetrically (canonical theme → aliases) but
//! lookup is symmetric: a question containing any member of a cluster
//! pulls in the whole cluster, canonical term included. To avoid scanning
//! the table per request, a symmetric closure map is built once and
//! shared read-only for the process lifetime.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Canonical theme → aliases. All tokens normalized lowercase.
pub const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("duty", &["work", "job", "career", "study", "responsibility", "task"]),
    ("surrender", &["refuge", "shelter", "give up", "trust", "faith"]),
    ("mind", &["anxiety", "stress", "thoughts", "overthink"]),
    ("soul", &["self", "atma", "spirit"]),
    ("devotion", &["bhakti", "worship", "love", "remember"]),
    ("anger", &["lust", "greed", "desire"]),
];

/// Symmetric view of the synonym table: every cluster member maps to the
/// indices of the clusters it belongs to.
struct ClosureMap {
    clusters: Vec<Vec<&'static str>>,
    member_index: HashMap<&'static str, Vec<usize>>,
}

fn closure_map() -> &'static ClosureMap {
    static CLOSURE: OnceLock<ClosureMap> = OnceLock::new();
    CLOSURE.get_or_init(|| {
        let mut clusters = Vec::with_capacity(SYNONYM_TABLE.len());
        let mut member_index: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for (canonical, aliases) in SYNONYM_TABLE {
            let idx = clusters.len();
            let mut cluster = Vec::with_capacity(aliases.len() + 1);
            cluster.push(*canonical);
            cluster.extend_from_slice(aliases);

            for &member in &cluster {
                member_index.entry(member).or_default().push(idx);
            }
            clusters.push(cluster);
        }

        ClosureMap {
            clusters,
            member_index,
        }
    })
}

/// Expand tokenized words into the query set.
///
/// Every input word is included as-is; a word equal to any cluster member
/// additionally pulls in that entire cluster. Only membership matters
/// downstream, so the result is a set.
pub fn expand(words: &[String]) -> HashSet<String> {
    let map = closure_map();
    let mut query = HashSet::new();

    for word in words {
        query.insert(word.clone());
        if let Some(indices) = map.member_index.get(word.as_str()) {
            for &idx in indices {
                for member in &map.clusters[idx] {
                    query.insert((*member).to_string());
                }
            }
        }
    }

    query
}
