//! Keyword tokenization — an ordered cascade of strategies of decreasing
//! sophistication.
//!
//! A strategy is skipped only when it is unavailable, never because it
//! produced an empty result: empty input legitimately yields zero tokens and
//! downstream stages treat that as "no extracted hashtags", not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static ALPHA_RUNS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").ok());

const STRATEGIES: [fn(&str) -> Option<Vec<String>>; 2] = [segment_words, regex_words];

/// Produces lowercase, purely-alphabetic tokens from free text.
pub fn tokenize(text: &str) -> Vec<String> {
    for strategy in STRATEGIES {
        if let Some(tokens) = strategy(text) {
            return tokens;
        }
    }
    whitespace_words(text)
}

/// Unicode word segmentation, filtered to alphabetic words.
fn segment_words(text: &str) -> Option<Vec<String>> {
    Some(
        text.unicode_words()
            .filter(|word| word.chars().all(|c| c.is_alphabetic()))
            .map(|word| word.to_lowercase())
            .collect(),
    )
}

/// Runs of ASCII letters. Unavailable if the pattern failed to compile.
fn regex_words(text: &str) -> Option<Vec<String>> {
    let re = ALPHA_RUNS.as_ref()?;
    Some(
        re.find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect(),
    )
}

/// Last resort: whitespace split keeping purely-alphabetic tokens.
fn whitespace_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_alphabetic()))
        .map(|word| word.to_lowercase())
        .collect()
}
