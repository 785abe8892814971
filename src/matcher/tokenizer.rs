//! Question tokenizer
//!
//! Normalizes free text into lowercase words with punctuation neutralized
//! and function words removed. An empty result is valid; the selector
//! resolves it through the fallback policy.

/// Function words excluded from matching.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "to", "in", "is", "are", "am", "and", "or", "for", "with", "on", "at",
    "by", "from", "that", "this", "those", "these", "it", "as", "be", "was", "were", "have", "has",
    "had", "do", "does", "did", "not", "no", "can", "could", "should", "would", "may", "might",
    "will", "shall", "my", "me", "i", "you", "your", "our", "us", "we",
];

/// Tokenize text into normalized, stopword-free words.
///
/// Every character that is neither alphanumeric nor whitespace becomes a
/// single space, so punctuation separates words instead of merging them.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .to_lowercase()
        .split_whitespace()
        .filter(|w| !STOPWORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let words = tokenize("What is my DUTY, O Krishna?");
        assert_eq!(words, vec!["what", "duty", "o", "krishna"]);
    }

    #[test]
    fn test_punctuation_does_not_merge_words() {
        let words = tokenize("work/career");
        assert_eq!(words, vec!["work", "career"]);
    }

    #[test]
    fn test_drops_stopwords() {
        let words = tokenize("I am the one who asks");
        assert!(!words.contains(&"i".to_string()));
        assert!(!words.contains(&"am".to_string()));
        assert!(!words.contains(&"the".to_string()));
        assert!(words.contains(&"asks".to_string()));
    }

    #[test]
    fn test_all_stopwords_yields_empty() {
        assert!(tokenize("the a of it").is_empty());
        assert!(tokenize("?!...").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_stopword_table_is_normalized() {
        for word in STOPWORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(!word.contains(char::is_whitespace));
        }
    }
}
