/// Model client — the single point of entry for external text-generation
/// calls.
///
/// ARCHITECTURAL RULE: no other module may talk to the generation endpoint
/// directly. Everything goes through the `TextGenerator` trait, so the
/// pipeline can be exercised with a mock and the endpoint swapped without
/// touching caller code.
///
/// The wire contract is an OpenAI-compatible completion endpoint
/// (`POST {base}/v1/completions`): given a prompt and sampling parameters it
/// returns one generated string, or the call fails.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handle;

const COMPLETIONS_PATH: &str = "/v1/completions";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned an empty completion")]
    EmptyCompletion,

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// Sampling parameters sent with every completion request.
///
/// Tuned for short, coherent captions: mild temperature, nucleus sampling,
/// and a repetition penalty above 1 to suppress loops.
#[derive(Debug, Clone, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.9,
            repetition_penalty: 1.3,
        }
    }
}

/// The external text-generation capability. May be absent at process start;
/// absence and invocation failure both degrade to the template composer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        params: &SamplingParams,
    ) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    repetition_penalty: f32,
    n: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// HTTP client for the completion endpoint. Retries on 429 and 5xx with
/// exponential backoff; all other failures surface as `ModelError`.
#[derive(Debug, Clone)]
pub struct TextGenClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl TextGenClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for TextGenClient {
    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        params: &SamplingParams,
    ) -> Result<String, ModelError> {
        let request_body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: max_new_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            repetition_penalty: params.repetition_penalty,
            n: 1,
        };
        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);

        let mut last_error: Option<ModelError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "completion attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&url).json(&request_body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ModelError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("completion endpoint returned {}: {}", status, body);
                last_error = Some(ModelError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ModelError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: CompletionResponse = response.json().await?;
            let text = completion
                .choices
                .into_iter()
                .next()
                .map(|c| c.text)
                .unwrap_or_default();

            if text.trim().is_empty() {
                return Err(ModelError::EmptyCompletion);
            }

            debug!("completion received: {} chars", text.len());
            return Ok(text);
        }

        Err(last_error.unwrap_or(ModelError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling_params_favor_determinism() {
        let params = SamplingParams::default();
        assert!((0.7..=0.8).contains(&params.temperature));
        assert!((params.top_p - 0.9).abs() < f32::EPSILON);
        assert!(params.repetition_penalty > 1.0);
    }

    #[test]
    fn test_client_normalizes_trailing_slash() {
        let client = TextGenClient::new(
            "http://localhost:8000/".to_string(),
            None,
            "gpt2".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_completion_request_serializes_single_sequence() {
        let request = CompletionRequest {
            model: "gpt2",
            prompt: "Write a caption:",
            max_tokens: 40,
            temperature: 0.8,
            top_p: 0.9,
            repetition_penalty: 1.3,
            n: 1,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["n"], 1);
        assert_eq!(json["max_tokens"], 40);
        assert_eq!(json["prompt"], "Write a caption:");
    }
}
