//! Process-wide model handle with idempotent lazy initialization.
//!
//! The first caller pays the initialization cost; every later caller reuses
//! the result. An initialization failure (no endpoint configured, client
//! construction error) is cached as "unavailable" and never retried — model
//! absence is a supported mode, not an error.

use std::time::Duration;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::Config;
use crate::model_client::TextGenClient;

static MODEL: OnceCell<Option<TextGenClient>> = OnceCell::new();

/// Returns the shared text-generation client, or `None` when the model is
/// unavailable. The answer is computed once per process lifetime.
pub fn model_handle(config: &Config) -> Option<&'static TextGenClient> {
    MODEL.get_or_init(|| init_client(config)).as_ref()
}

fn init_client(config: &Config) -> Option<TextGenClient> {
    let base_url = match &config.model_base_url {
        Some(url) => url.clone(),
        None => {
            warn!("CAPTION_MODEL_URL not set — captions will use the template fallback");
            return None;
        }
    };

    match TextGenClient::new(
        base_url,
        config.model_api_key.clone(),
        config.model_name.clone(),
        Duration::from_secs(config.model_timeout_secs),
    ) {
        Ok(client) => {
            info!("text-generation client initialized (model: {})", client.model());
            Some(client)
        }
        Err(e) => {
            warn!("could not initialize text-generation client: {e} — using the template fallback");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_endpoint() -> Config {
        Config {
            model_base_url: None,
            model_api_key: None,
            model_name: "gpt2".to_string(),
            model_timeout_secs: 120,
            rust_log: "info".to_string(),
        }
    }

    /// The handle is resolved once and the "unavailable" answer is cached:
    /// repeated calls return the same result without re-initializing.
    #[test]
    fn test_missing_endpoint_is_cached_as_unavailable() {
        let config = config_without_endpoint();
        assert!(model_handle(&config).is_none());
        assert!(model_handle(&config).is_none());
    }
}
