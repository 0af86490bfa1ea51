//! Stop-word membership — a built-in floor set unioned with the external
//! English list.
//!
//! The built-in set is the guaranteed minimum; the external list only ever
//! adds to it, so filtering degrades gracefully rather than failing.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use stop_words::{get, LANGUAGE};

/// Common English function words filtered even without the external list.
const BUILTIN_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "it", "this", "that", "as", "from", "about",
];

static STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut words: HashSet<String> = BUILTIN_STOP_WORDS.iter().map(|w| w.to_string()).collect();
    words.extend(get(LANGUAGE::English));
    words
});

/// Reports whether a lowercase token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_words_are_stop_words() {
        for word in BUILTIN_STOP_WORDS {
            assert!(is_stop_word(word), "'{word}' must be a stop word");
        }
    }

    #[test]
    fn test_content_words_are_not_stop_words() {
        assert!(!is_stop_word("coffee"));
        assert!(!is_stop_word("travel"));
        assert!(!is_stop_word("fitness"));
    }

    #[test]
    fn test_external_list_extends_the_builtin_set() {
        // "my" comes from the external English list, not the built-in floor.
        assert!(!BUILTIN_STOP_WORDS.contains(&"my"));
        assert!(is_stop_word("my"));
    }
}
