use thiserror::Error;

/// Application-level error type for the CLI boundary.
///
/// Nothing below this boundary is fatal: model failures degrade to the
/// template fallback and tokenizer degradation is silent, so the only errors
/// that surface here are invalid input and serialization problems.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
