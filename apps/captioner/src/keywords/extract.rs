//! Caption analysis — recovers candidate keywords from an existing caption.
//!
//! URLs, mentions, and hashtags are stripped BEFORE word extraction, so a
//! `#coffee` tag never leaks "coffee" into the results.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keywords::stopwords::is_stop_word;

/// Maximum number of unique keywords returned.
const MAX_KEYWORDS: usize = 10;

static NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|@\w+|#\w+").expect("hardcoded pattern is valid"));
static WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("hardcoded pattern is valid"));

/// Extracts up to 10 unique, lowercase, stop-word-free keywords from a
/// caption, in first-occurrence order.
pub fn extract_keywords_from_caption(caption: &str) -> Vec<String> {
    let lowered = caption.to_lowercase();
    let cleaned = NOISE.replace_all(&lowered, "");

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for m in WORDS.find_iter(&cleaned) {
        let word = m.as_str();
        if is_stop_word(word) || !seen.insert(word.to_string()) {
            continue;
        }
        keywords.push(word.to_string());
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }
    keywords
}
