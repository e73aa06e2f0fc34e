//! Keyword extraction: normalize free text into a filtered token list.
//!
//! Lowercase, split on whitespace, strip non-alphanumeric characters per
//! token, drop short tokens and stop-words, keep the first 20 survivors
//! in original order. Pure and deterministic.

use muse_core::constants::{MAX_KEYWORDS, MIN_KEYWORD_LEN};

/// Articles, prepositions, common auxiliaries, demonstratives.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "about", "into", "over", "after", "before", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "this", "that", "these", "those",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract up to [`MAX_KEYWORDS`] keywords from `text`, in original order.
pub fn extract(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|token| token.len() > MIN_KEYWORD_LEN && !is_stop_word(token))
        .take(MAX_KEYWORDS)
        .collect()
}

/// Count how many of `needles` occur in `haystack` (set overlap, each
/// needle counted once).
pub fn overlap_count(needles: &[String], haystack: &[String]) -> usize {
    needles.iter().filter(|n| haystack.contains(n)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens = extract("Morning Routine, App!");
        assert_eq!(tokens, vec!["morning", "routine"]);
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let tokens = extract("the quick app is about habit tracking");
        // "the"/"is"/"about" are stop-words; "app" has length 3.
        assert_eq!(tokens, vec!["quick", "habit", "tracking"]);
    }

    #[test]
    fn keeps_at_most_twenty_tokens() {
        let text = (0..40)
            .map(|i| format!("keyword{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract(&text).len(), MAX_KEYWORDS);
    }

    #[test]
    fn preserves_original_order() {
        let tokens = extract("zebra apple mango");
        assert_eq!(tokens, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let text = "Let's continue building the morning routine tracker";
        assert_eq!(extract(text), extract(text));
    }
}
