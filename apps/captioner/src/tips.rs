//! Platform advice tables — engagement tips and posting-time guidance
//! surfaced by the `tips` subcommand. Pure lookups, no generation involved.

use crate::generation::catalog::Platform;

/// Engagement tips per platform.
pub fn platform_tips(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &[
            "Use 3-5 hashtags in your first comment instead of the caption",
            "Post when your audience is most active (usually 6-9 PM)",
            "Include a clear call-to-action",
            "Use Stories to drive traffic to your post",
            "Engage with comments within the first hour",
        ],
        Platform::Twitter => &[
            "Tweet during peak hours (9 AM - 3 PM)",
            "Use 1-2 relevant hashtags maximum",
            "Include images or GIFs for better engagement",
            "Retweet and reply to build community",
            "Keep it concise and punchy",
        ],
        Platform::LinkedIn => &[
            "Post during business hours (Tuesday-Thursday)",
            "Share valuable insights and lessons learned",
            "Use professional language and industry terms",
            "Tag relevant people and companies",
            "Include industry-specific hashtags",
        ],
        Platform::Facebook => &[
            "Post when your audience is online (check Insights)",
            "Ask questions to encourage comments",
            "Share behind-the-scenes content",
            "Use Facebook Groups for niche targeting",
            "Include local hashtags if relevant",
        ],
    }
}

/// Best posting-time window per platform.
pub fn optimal_posting_time(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => "6-9 PM weekdays, 10 AM-1 PM weekends",
        Platform::Twitter => "9 AM-3 PM weekdays",
        Platform::LinkedIn => "8-10 AM and 12-2 PM Tuesday-Thursday",
        Platform::Facebook => "1-4 PM weekdays",
    }
}
