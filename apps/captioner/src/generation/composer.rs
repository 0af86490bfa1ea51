//! Model-backed caption composition — prompt build, one bounded generation
//! call, and post-processing of the raw completion into a usable caption.
//!
//! Post-processing order matters: strip the echoed prompt, close the first
//! sentence, enforce the hard ceiling, then (maybe) append the CTA.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;
use tracing::debug;

use crate::generation::catalog::{cta_variants, Platform, Tone};
use crate::generation::prompts::build_prompt;
use crate::model_client::{ModelError, SamplingParams, TextGenerator};

/// Absolute cap on newly generated tokens. The intent is a short caption
/// continuation, not a long completion.
const MAX_NEW_TOKENS: u32 = 80;
/// Tokens allowed beyond the prompt's own word count.
const PROMPT_MARGIN_TOKENS: u32 = 25;
/// Absolute cap on cleaned caption length, in characters.
const MAX_CAPTION_CHARS: usize = 300;
/// Characters reserved below the platform limit for appended hashtags.
const HASHTAG_HEADROOM: usize = 100;

/// A terminator run followed by the capital-letter start of a second
/// sentence — the signature of a rambling continuation.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?]+)\s+[A-Z]").expect("hardcoded pattern is valid"));

/// Composes a caption via the external model. Any error propagates to the
/// pipeline, which falls back to the template composer.
pub async fn compose_with_model(
    model: &dyn TextGenerator,
    keywords: &str,
    platform: Platform,
    tone: Tone,
    include_cta: bool,
) -> Result<String, ModelError> {
    let prompt = build_prompt(tone, keywords);
    let budget = generation_budget(&prompt, platform);

    let raw = model
        .generate(&prompt, budget, &SamplingParams::default())
        .await?;

    let stripped = strip_prompt_prefix(&raw, &prompt).trim();
    let ceiling = caption_ceiling(platform);
    let mut caption = enforce_ceiling(&close_first_sentence(stripped), ceiling);

    if include_cta {
        caption = append_cta_within(&caption, platform, ceiling);
    }

    Ok(caption)
}

/// Generation budget in tokens: bounded by the prompt's own word count plus
/// a fixed margin, capped per platform.
fn generation_budget(prompt: &str, platform: Platform) -> u32 {
    let prompt_words = prompt.split_whitespace().count() as u32;
    let platform_cap = (platform.char_limit() / 8).min(MAX_NEW_TOKENS as usize).max(1) as u32;
    (prompt_words + PROMPT_MARGIN_TOKENS).min(platform_cap)
}

/// Removes the echoed prompt from the start of the raw completion, if present.
fn strip_prompt_prefix<'a>(raw: &'a str, prompt: &str) -> &'a str {
    raw.strip_prefix(prompt).unwrap_or(raw)
}

/// Trims to the first terminator run when a capital-initial second sentence
/// follows it; otherwise guarantees a trailing terminator.
fn close_first_sentence(caption: &str) -> String {
    if let Some(caps) = SENTENCE_BREAK.captures(caption) {
        if let Some(run) = caps.get(1) {
            return caption[..run.end()].to_string();
        }
    }
    let trimmed = caption.trim_end();
    if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// The hard per-platform caption ceiling, in characters.
fn caption_ceiling(platform: Platform) -> usize {
    MAX_CAPTION_CHARS.min(platform.char_limit().saturating_sub(HASHTAG_HEADROOM))
}

/// Enforces the ceiling: prefer cutting at the first sentence terminator,
/// then at the last whitespace boundary before the ceiling.
fn enforce_ceiling(caption: &str, ceiling: usize) -> String {
    if caption.chars().count() <= ceiling {
        return caption.to_string();
    }

    if let Some(pos) = caption.find(['.', '!', '?']) {
        let cut = &caption[..=pos];
        if cut.chars().count() <= ceiling {
            return cut.to_string();
        }
    }

    let prefix: String = caption.chars().take(ceiling).collect();
    let cut = match prefix.rfind(char::is_whitespace) {
        Some(ws) => prefix[..ws].trim_end().to_string(),
        None => prefix,
    };
    format!("{}.", cut.trim_end())
}

/// Appends a random CTA only if the combined text still fits the ceiling;
/// otherwise returns the caption unchanged.
fn append_cta_within(caption: &str, platform: Platform, ceiling: usize) -> String {
    let mut rng = rand::thread_rng();
    if let Some(cta) = cta_variants(platform).choose(&mut rng) {
        let combined = caption.chars().count() + 1 + cta.chars().count();
        if combined <= ceiling {
            return format!("{caption} {cta}");
        }
        debug!("omitting call-to-action: {combined} chars exceeds the {ceiling}-char ceiling");
    }
    caption.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Mock generator returning a canned completion (with the prompt echoed,
    /// as completion models do).
    struct EchoingModel {
        completion: &'static str,
    }

    #[async_trait]
    impl TextGenerator for EchoingModel {
        async fn generate(
            &self,
            prompt: &str,
            _max_new_tokens: u32,
            _params: &SamplingParams,
        ) -> Result<String, ModelError> {
            Ok(format!("{prompt}{}", self.completion))
        }
    }

    struct FailingModel;

    #[async_trait]
    impl TextGenerator for FailingModel {
        async fn generate(
            &self,
            _prompt: &str,
            _max_new_tokens: u32,
            _params: &SamplingParams,
        ) -> Result<String, ModelError> {
            Err(ModelError::EmptyCompletion)
        }
    }

    #[test]
    fn test_budget_is_bounded_by_prompt_words_plus_margin() {
        // Casual prompt for "coffee" is 9 words; margin 25 → 34, under the
        // Facebook cap of 80.
        let prompt = build_prompt(Tone::Casual, "coffee");
        let words = prompt.split_whitespace().count() as u32;
        assert_eq!(
            generation_budget(&prompt, Platform::Facebook),
            words + PROMPT_MARGIN_TOKENS
        );
    }

    #[test]
    fn test_budget_is_capped_by_the_platform() {
        // Twitter: 280 / 8 = 35 caps the word-count bound.
        let prompt = build_prompt(Tone::Educational, "a very long list of keywords about travel food fitness tech business and motivation all at once");
        assert_eq!(generation_budget(&prompt, Platform::Twitter), 35);
    }

    #[test]
    fn test_strip_prompt_prefix_removes_the_echo() {
        assert_eq!(strip_prompt_prefix("PROMPT tail", "PROMPT"), " tail");
        assert_eq!(strip_prompt_prefix("no echo here", "PROMPT"), "no echo here");
    }

    #[test]
    fn test_close_first_sentence_cuts_rambling_continuations() {
        assert_eq!(
            close_first_sentence("Coffee is life. Also I like tea and many other"),
            "Coffee is life."
        );
        assert_eq!(close_first_sentence("Great vibes!! More soon"), "Great vibes!!");
    }

    #[test]
    fn test_close_first_sentence_appends_missing_terminator() {
        assert_eq!(close_first_sentence("coffee time"), "coffee time.");
        assert_eq!(close_first_sentence("coffee time!"), "coffee time!");
    }

    #[test]
    fn test_close_first_sentence_keeps_lowercase_continuations() {
        // No capital-initial second sentence — only the trailing terminator
        // guarantee applies.
        assert_eq!(
            close_first_sentence("coffee. and then more coffee"),
            "coffee. and then more coffee."
        );
    }

    #[test]
    fn test_enforce_ceiling_prefers_the_first_terminator() {
        let caption = format!("Short start. {}", "x".repeat(400));
        assert_eq!(enforce_ceiling(&caption, 300), "Short start.");
    }

    #[test]
    fn test_enforce_ceiling_falls_back_to_whitespace_cut() {
        let caption = "word ".repeat(100); // 500 chars, no terminator
        let cut = enforce_ceiling(&caption, 50);
        assert!(cut.chars().count() <= 51);
        assert!(cut.ends_with('.'));
        assert!(!cut.contains("  "));
    }

    #[test]
    fn test_enforce_ceiling_leaves_short_captions_alone() {
        assert_eq!(enforce_ceiling("fine as is.", 300), "fine as is.");
    }

    #[test]
    fn test_twitter_ceiling_reserves_hashtag_headroom() {
        assert_eq!(caption_ceiling(Platform::Twitter), 180);
        assert_eq!(caption_ceiling(Platform::Instagram), 300);
    }

    #[test]
    fn test_cta_is_omitted_when_it_would_exceed_the_ceiling() {
        let caption = "x".repeat(179);
        let result = append_cta_within(&caption, Platform::Twitter, 180);
        assert_eq!(result, caption, "no Twitter CTA fits in 1 spare char");
    }

    #[test]
    fn test_cta_is_appended_when_it_fits() {
        let result = append_cta_within("Nice day.", Platform::Twitter, 180);
        assert!(result.len() > "Nice day.".len());
        let appended = cta_variants(Platform::Twitter)
            .iter()
            .any(|cta| result.ends_with(cta));
        assert!(appended, "result must end with a Twitter CTA: {result:?}");
    }

    #[tokio::test]
    async fn test_compose_with_model_cleans_the_completion() {
        let model = EchoingModel {
            completion: " Coffee keeps the morning honest. Also rambling continues here",
        };
        let caption =
            compose_with_model(&model, "coffee", Platform::Instagram, Tone::Casual, false)
                .await
                .unwrap();
        assert_eq!(caption, "Coffee keeps the morning honest.");
    }

    #[tokio::test]
    async fn test_compose_with_model_propagates_failure() {
        let result =
            compose_with_model(&FailingModel, "coffee", Platform::Instagram, Tone::Casual, false)
                .await;
        assert!(result.is_err());
    }
}
