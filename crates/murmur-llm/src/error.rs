use murmur_core::{ServiceError, Stage};
use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum LlmError {
    /// Upstream provider could not be reached or returned an error status
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider answered successfully but produced no text
    #[error("No response generated")]
    EmptyResponse,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for ServiceError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::EmptyResponse => Self::UpstreamEmptyResult {
                stage: Stage::Generation,
                reason: error.to_string(),
            },
            other => Self::transport(Stage::Generation, other),
        }
    }
}
