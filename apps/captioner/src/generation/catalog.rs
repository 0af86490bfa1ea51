#![allow(dead_code)]

//! Platform and tone catalogs — the categorical inputs and their fixed tables.
//!
//! Every table here is a `'static` constant resolved by `match`; nothing is
//! mutated after startup. Unrecognized platform/tone names are normalized to
//! defaults at the parse boundary, so the rest of the pipeline only ever sees
//! closed enums.

use serde::{Deserialize, Serialize};

/// Target social-media platform. Drives character limits, curated hashtag and
/// emoji sets, and call-to-action phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Instagram,
    Twitter,
    LinkedIn,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Facebook,
    ];

    /// Lenient, case-insensitive parse. Unrecognized names fall back to
    /// Instagram, the carrier of the default character limit.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "twitter" => Platform::Twitter,
            "linkedin" => Platform::LinkedIn,
            "facebook" => Platform::Facebook,
            _ => Platform::Instagram,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::Facebook => "Facebook",
        }
    }

    /// Maximum caption length, in characters.
    pub fn char_limit(&self) -> usize {
        match self {
            Platform::Instagram => 2200,
            Platform::Twitter => 280,
            Platform::LinkedIn => 3000,
            Platform::Facebook => 63206,
        }
    }
}

/// Caption tone. Selects the prompt template for model-backed generation and
/// the template list for the fallback composer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Inspirational,
    Humorous,
    Educational,
}

impl Tone {
    /// Lenient, case-insensitive parse. Unrecognized names fall back to Casual.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "professional" => Tone::Professional,
            "inspirational" => Tone::Inspirational,
            "humorous" => Tone::Humorous,
            "educational" => Tone::Educational,
            _ => Tone::Casual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "Casual",
            Tone::Professional => "Professional",
            Tone::Inspirational => "Inspirational",
            Tone::Humorous => "Humorous",
            Tone::Educational => "Educational",
        }
    }
}

/// Call-to-action phrase variants per platform. One is chosen uniformly at
/// random per caption when the caller asks for a CTA.
pub fn cta_variants(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &[
            "Double tap if you agree! 💕",
            "Tag someone who needs to see this! 👇",
            "Save this post for later! 📌",
            "What do you think? Comment below! 💬",
        ],
        Platform::Twitter => &[
            "Retweet if you agree! 🔄",
            "What's your take? Reply below! 💭",
            "Share your thoughts! 👇",
            "Tag someone who needs this! 🏷️",
        ],
        Platform::LinkedIn => &[
            "What are your thoughts? Share in the comments! 💼",
            "Connect with me for more insights! 🤝",
            "Save this post for future reference! 📌",
            "Share if this resonates with your network! 📢",
        ],
        Platform::Facebook => &[
            "Like if you agree! 👍",
            "Share with your friends! 📤",
            "What do you think? Comment below! 💬",
            "Tag someone who would love this! 🏷️",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_has_a_char_limit() {
        assert_eq!(Platform::Instagram.char_limit(), 2200);
        assert_eq!(Platform::Twitter.char_limit(), 280);
        assert_eq!(Platform::LinkedIn.char_limit(), 3000);
        assert_eq!(Platform::Facebook.char_limit(), 63206);
    }

    #[test]
    fn test_platform_parse_is_case_insensitive() {
        assert_eq!(Platform::parse("TWITTER"), Platform::Twitter);
        assert_eq!(Platform::parse("LinkedIn"), Platform::LinkedIn);
        assert_eq!(Platform::parse("  facebook "), Platform::Facebook);
    }

    #[test]
    fn test_unrecognized_platform_falls_back_to_instagram() {
        assert_eq!(Platform::parse("myspace"), Platform::Instagram);
        assert_eq!(Platform::parse(""), Platform::Instagram);
    }

    #[test]
    fn test_unrecognized_tone_falls_back_to_casual() {
        assert_eq!(Tone::parse("sarcastic"), Tone::Casual);
        assert_eq!(Tone::parse(""), Tone::Casual);
        assert_eq!(Tone::parse("Educational"), Tone::Educational);
    }

    #[test]
    fn test_every_platform_has_four_cta_variants() {
        for platform in Platform::ALL {
            assert_eq!(
                cta_variants(platform).len(),
                4,
                "{} must have 4 CTA variants",
                platform.as_str()
            );
        }
    }

    #[test]
    fn test_twitter_cta_variants_are_the_known_set() {
        let ctas = cta_variants(Platform::Twitter);
        assert!(ctas.contains(&"Retweet if you agree! 🔄"));
        assert!(ctas.contains(&"Tag someone who needs this! 🏷️"));
    }
}
