//! Hashtag suggestion — keyword-derived tags, curated platform tags, and
//! topic tags, deduplicated in emission order and capped at 15.

use rand::seq::SliceRandom;

use crate::generation::catalog::Platform;
use crate::keywords::stopwords::is_stop_word;
use crate::keywords::tokenizer::tokenize;
use crate::suggest::dedup_truncate;

/// Hard cap on returned hashtags.
pub const MAX_HASHTAGS: usize = 15;

/// Curated platform tags sampled per call.
const PLATFORM_SAMPLE: usize = 5;
/// Topic tags sampled per matching topic.
const TOPIC_SAMPLE: usize = 3;

/// Curated hashtags per platform.
pub fn platform_hashtags(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &[
            "#InstaGood",
            "#PhotoOfTheDay",
            "#Love",
            "#Instagrams",
            "#Follow",
            "#Like4Like",
            "#Amazing",
            "#Beautiful",
        ],
        Platform::Twitter => &[
            "#Trending",
            "#Twitter",
            "#Social",
            "#News",
            "#Update",
            "#Thoughts",
            "#Community",
            "#Viral",
        ],
        Platform::LinkedIn => &[
            "#LinkedIn",
            "#Career",
            "#Business",
            "#Professional",
            "#Leadership",
            "#Growth",
            "#Success",
            "#Networking",
        ],
        Platform::Facebook => &[
            "#Facebook",
            "#Social",
            "#Community",
            "#Family",
            "#Friends",
            "#Life",
            "#Update",
            "#Share",
        ],
    }
}

/// Topic hashtags, matched when the topic key is a literal substring of the
/// lowercased raw keyword text.
pub const TOPIC_HASHTAGS: &[(&str, &[&str])] = &[
    (
        "travel",
        &["#Travel", "#Adventure", "#Wanderlust", "#Explore", "#Vacation"],
    ),
    ("food", &["#Food", "#Foodie", "#Delicious", "#Cooking", "#Recipe"]),
    (
        "fitness",
        &["#Fitness", "#Gym", "#Workout", "#Health", "#Motivation"],
    ),
    ("tech", &["#Tech", "#Technology", "#Innovation", "#Digital", "#Future"]),
    (
        "business",
        &["#Business", "#Entrepreneur", "#Success", "#Growth", "#Leadership"],
    ),
    (
        "motivation",
        &["#Motivation", "#Inspiration", "#Success", "#Goals", "#Mindset"],
    ),
];

/// Suggests up to 15 unique hashtags for the keyword text and platform.
pub fn suggest_hashtags(keywords: &str, platform: Platform) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut hashtags: Vec<String> = Vec::new();

    for token in tokenize(keywords) {
        if token.chars().count() > 2 && !is_stop_word(&token) {
            hashtags.push(format!("#{}", capitalize(&token)));
        }
    }

    hashtags.extend(
        platform_hashtags(platform)
            .choose_multiple(&mut rng, PLATFORM_SAMPLE)
            .map(|tag| tag.to_string()),
    );

    let lowered = keywords.to_lowercase();
    for (topic, tags) in TOPIC_HASHTAGS {
        if lowered.contains(topic) {
            hashtags.extend(
                tags.choose_multiple(&mut rng, TOPIC_SAMPLE)
                    .map(|tag| tag.to_string()),
            );
        }
    }

    dedup_truncate(hashtags, MAX_HASHTAGS)
}

/// Uppercases the first letter, leaving the (already lowercase) rest as is.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
