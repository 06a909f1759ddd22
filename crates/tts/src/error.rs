use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Failures raised by a speech synthesis provider
#[derive(Debug, Error)]
pub enum TtsError {
    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider API returned a non-success status
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered with a body we could not use
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
