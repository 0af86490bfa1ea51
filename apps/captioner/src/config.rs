use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
///
/// Every model setting is optional: a missing endpoint is the supported
/// "model unavailable" mode, in which the template fallback handles all
/// captions.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of an OpenAI-compatible completion endpoint. Unset → model
    /// unavailable.
    pub model_base_url: Option<String>,
    pub model_api_key: Option<String>,
    pub model_name: String,
    pub model_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            model_base_url: optional_env("CAPTION_MODEL_URL"),
            model_api_key: optional_env("CAPTION_MODEL_API_KEY"),
            model_name: std::env::var("CAPTION_MODEL_NAME")
                .unwrap_or_else(|_| "gpt2".to_string()),
            model_timeout_secs: std::env::var("CAPTION_MODEL_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("CAPTION_MODEL_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
