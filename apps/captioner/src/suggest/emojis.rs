//! Emoji suggestion — topic-matched emojis plus curated platform emojis,
//! deduplicated in emission order and capped at 8.

use rand::seq::SliceRandom;

use crate::generation::catalog::Platform;
use crate::suggest::dedup_truncate;

/// Hard cap on returned emojis.
pub const MAX_EMOJIS: usize = 8;

/// Topic emojis sampled per matching topic key.
const TOPIC_SAMPLE: usize = 2;
/// Platform emojis sampled per call.
const PLATFORM_SAMPLE: usize = 4;

/// Curated emojis per platform.
pub fn platform_emojis(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &[
            "😍", "✨", "🌟", "🔥", "💖", "🌍", "📸", "🎉", "💯", "🙌", "😎", "🌈",
        ],
        Platform::Twitter => &[
            "🚀", "🔥", "💬", "📈", "🌟", "😎", "👀", "🎯", "⚡", "🧵", "💭", "🔔",
        ],
        Platform::LinkedIn => &[
            "💼", "📈", "🚀", "🌟", "🤝", "💡", "🎯", "🔗", "📊", "🎓", "💪", "🏆",
        ],
        Platform::Facebook => &[
            "❤️", "😊", "🎉", "👨‍👩‍👧‍👦", "🏠", "🌟", "💖", "😍", "🤗", "🎈", "🌸", "☀️",
        ],
    }
}

/// Keyword-to-emoji topics. Matched in both directions: a token may contain
/// a topic key, or name a longer topic the token abbreviates.
pub const KEYWORD_EMOJIS: &[(&str, &[&str])] = &[
    ("travel", &["✈️", "🌍", "🗺️", "🧳", "🏖️", "🏔️"]),
    ("motivation", &["💪", "🌟", "🚀", "🔥", "⚡", "🏆"]),
    ("tech", &["💻", "📱", "🔬", "🤖", "🖥️", "⚙️"]),
    ("food", &["🍔", "🍕", "🥗", "🍰", "☕", "🍜"]),
    ("fitness", &["🏋️", "💪", "🏃", "🚴", "🥇", "⚽"]),
    ("business", &["💼", "📈", "💰", "🤝", "📊", "🎯"]),
    ("love", &["❤️", "💖", "😍", "💕", "🥰", "💝"]),
    ("success", &["🏆", "🎉", "🌟", "🔥", "💯", "🚀"]),
    ("happy", &["😊", "😁", "🎉", "🌈", "☀️", "🎈"]),
    ("coffee", &["☕", "🌅", "💪", "⚡", "📅", "💼"]),
];

/// Suggests up to 8 unique emojis for the keyword text and platform.
pub fn suggest_emojis(keywords: &str, platform: Platform) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut selected: Vec<String> = Vec::new();

    for token in keywords.to_lowercase().split_whitespace() {
        for (key, emojis) in KEYWORD_EMOJIS {
            if key.contains(token) || token.contains(key) {
                selected.extend(
                    emojis
                        .choose_multiple(&mut rng, TOPIC_SAMPLE)
                        .map(|e| e.to_string()),
                );
            }
        }
    }

    selected.extend(
        platform_emojis(platform)
            .choose_multiple(&mut rng, PLATFORM_SAMPLE)
            .map(|e| e.to_string()),
    );

    dedup_truncate(selected, MAX_EMOJIS)
}
