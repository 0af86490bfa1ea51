//! Template-only caption composition — used whenever the external model is
//! unavailable or a generation call fails.
//!
//! Captions built here are always short, so no truncation is applied; the
//! pipeline still runs them through the same length classification as model
//! output.

use rand::seq::SliceRandom;

use crate::generation::catalog::{cta_variants, Platform, Tone};

/// Candidate caption templates per tone. Each embeds the raw keyword text
/// verbatim at `{keywords}`.
pub fn fallback_templates(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Casual => &[
            "Just had an amazing experience with {keywords}! ✨",
            "Can't get enough of {keywords} lately. 😎",
            "Good vibes and {keywords} — that's the whole post.",
        ],
        Tone::Professional => &[
            "Exploring new opportunities in {keywords}. Key insights ahead.",
            "Reflecting on what {keywords} means for our industry right now.",
        ],
        Tone::Inspirational => &[
            "Every journey with {keywords} teaches us something valuable. Keep growing! 🌟",
            "Let {keywords} remind you how far you've already come. Keep going!",
        ],
        Tone::Humorous => &[
            "When life gives you {keywords}, make it memorable! 😄",
            "Me? Obsessed with {keywords}? ...Okay, maybe a little. 😅",
        ],
        Tone::Educational => &[
            "Here's what I learned about {keywords} today...",
            "Three things {keywords} taught me this week:",
        ],
    }
}

/// Composes a caption purely from templates and keyword interpolation.
pub fn compose_fallback(
    keywords: &str,
    platform: Platform,
    tone: Tone,
    include_cta: bool,
) -> String {
    let templates = fallback_templates(tone);
    let mut rng = rand::thread_rng();
    let template = templates.choose(&mut rng).copied().unwrap_or("{keywords}");

    let mut caption = template.replace("{keywords}", keywords);

    if include_cta {
        if let Some(cta) = cta_variants(platform).choose(&mut rng) {
            caption.push(' ');
            caption.push_str(cta);
        }
    }

    caption
}
