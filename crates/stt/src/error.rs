use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Failures raised while talking to a transcription provider
///
/// A transcript that the provider itself marks as failed is not an error
/// here; it comes back as [`crate::TranscriptStatus::Error`].
#[derive(Debug, Error)]
pub enum SttError {
    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider API returned a non-success status
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered with a body we could not use
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// The transcript never reached a terminal status
    #[error("Transcript {id} not finished after {waited_secs}s")]
    PollTimeout { id: String, waited_secs: u64 },
}
