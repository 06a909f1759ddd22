/// Terminal state of a transcription job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStatus {
    Completed,
    Error,
}

/// Outcome of transcribing one audio payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    /// Recognized text, empty when nothing was recognized
    pub text: String,
    pub status: TranscriptStatus,
    /// Provider-supplied reason when `status` is `Error`
    pub error: Option<String>,
}

impl TranscriptionResult {
    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranscriptStatus::Completed,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            status: TranscriptStatus::Error,
            error: Some(error.into()),
        }
    }

    /// Whether the transcript contains no speech at all
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
