//! Caption pipeline — orchestrates the full generation flow.
//!
//! Flow: model handle check → model-backed compose (§composer) or template
//! fallback (§fallback) → length classification per variant.
//!
//! Repeated calls with identical input are not required to be identical:
//! template and CTA selection are randomized by design.

use serde::Serialize;
use tracing::warn;

use crate::generation::catalog::{Platform, Tone};
use crate::generation::composer::compose_with_model;
use crate::generation::fallback::compose_fallback;
use crate::generation::length::{classify_caption_length, LengthReport};
use crate::model_client::TextGenerator;

/// Upper bound on caption variations per request.
pub const MAX_CAPTION_VARIANTS: u8 = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A single caption generation request. Transient — never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub keywords: String,
    pub platform: Platform,
    pub tone: Tone,
    pub include_cta: bool,
    /// Requested variations; clamped to 1..=MAX_CAPTION_VARIANTS.
    pub num_captions: u8,
}

/// One generated caption with its length report.
#[derive(Debug, Clone, Serialize)]
pub struct CaptionVariant {
    pub text: String,
    pub length: LengthReport,
}

/// The assembled output displayed to the user: captions plus the
/// independently produced hashtag and emoji suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub platform: Platform,
    pub captions: Vec<CaptionVariant>,
    pub hashtags: Vec<String>,
    pub emojis: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates one caption. Delegates to the model-backed composer when a
/// model is available; any model failure is logged and degrades to the
/// template fallback — never surfaced to the caller as an error.
pub async fn generate_caption(
    model: Option<&dyn TextGenerator>,
    keywords: &str,
    platform: Platform,
    tone: Tone,
    include_cta: bool,
) -> String {
    if let Some(model) = model {
        match compose_with_model(model, keywords, platform, tone, include_cta).await {
            Ok(caption) => return caption,
            Err(e) => warn!("model generation failed: {e} — using the template fallback"),
        }
    }
    compose_fallback(keywords, platform, tone, include_cta)
}

/// Generates 1–3 independent caption variations, each with its own length
/// report.
pub async fn generate_captions(
    model: Option<&dyn TextGenerator>,
    request: &GenerationRequest,
) -> Vec<CaptionVariant> {
    let count = request.num_captions.clamp(1, MAX_CAPTION_VARIANTS);
    let mut variants = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let text = generate_caption(
            model,
            &request.keywords,
            request.platform,
            request.tone,
            request.include_cta,
        )
        .await;
        let length = classify_caption_length(&text, request.platform);
        variants.push(CaptionVariant { text, length });
    }
    variants
}
