#![allow(dead_code)]

//! Caption length classification against platform limits.
//!
//! Display guidance only — a caption over the limit is reported, never
//! rejected.

use std::fmt;

use serde::Serialize;

use crate::generation::catalog::Platform;

/// Derived length classification for a caption on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthClass {
    /// At most 80% of the platform limit.
    Optimal,
    /// Within the platform limit.
    Good,
    /// Over the platform limit.
    TooLong,
}

impl LengthClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthClass::Optimal => "optimal",
            LengthClass::Good => "good",
            LengthClass::TooLong => "too_long",
        }
    }
}

/// Length report attached to every generated caption.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LengthReport {
    pub class: LengthClass,
    pub length: usize,
    pub limit: usize,
}

impl fmt::Display for LengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.class {
            LengthClass::Optimal => "Perfect length",
            LengthClass::Good => "Good length",
            LengthClass::TooLong => "Too long",
        };
        write!(f, "{} ({}/{} chars)", label, self.length, self.limit)
    }
}

/// Classifies a caption's character count against the platform limit.
pub fn classify_caption_length(caption: &str, platform: Platform) -> LengthReport {
    let length = caption.chars().count();
    let limit = platform.char_limit();
    let class = if length * 5 <= limit * 4 {
        LengthClass::Optimal
    } else if length <= limit {
        LengthClass::Good
    } else {
        LengthClass::TooLong
    };
    LengthReport {
        class,
        length,
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_100_chars_on_twitter_is_optimal() {
        let report = classify_caption_length(&"x".repeat(100), Platform::Twitter);
        assert_eq!(report.class, LengthClass::Optimal);
        assert_eq!(report.length, 100);
        assert_eq!(report.limit, 280);
    }

    #[test]
    fn test_250_chars_on_twitter_is_good() {
        let report = classify_caption_length(&"x".repeat(250), Platform::Twitter);
        assert_eq!(report.class, LengthClass::Good);
    }

    #[test]
    fn test_300_chars_on_twitter_is_too_long() {
        let report = classify_caption_length(&"x".repeat(300), Platform::Twitter);
        assert_eq!(report.class, LengthClass::TooLong);
    }

    #[test]
    fn test_exact_80_percent_boundary_is_optimal() {
        // 224 = 280 * 0.8 exactly
        let report = classify_caption_length(&"x".repeat(224), Platform::Twitter);
        assert_eq!(report.class, LengthClass::Optimal);
        let report = classify_caption_length(&"x".repeat(225), Platform::Twitter);
        assert_eq!(report.class, LengthClass::Good);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let report = classify_caption_length("héllo", Platform::Twitter);
        assert_eq!(report.length, 5);
    }

    #[test]
    fn test_class_serializes_as_snake_case() {
        let json = serde_json::to_string(&LengthClass::TooLong).unwrap();
        assert_eq!(json, r#""too_long""#);
    }
}
