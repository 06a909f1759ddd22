pub mod assemblyai;

use async_trait::async_trait;

use crate::types::TranscriptionResult;

/// Trait for STT provider implementations
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe raw audio, waiting until the provider reaches a terminal status
    async fn transcribe(&self, audio: Vec<u8>) -> crate::error::Result<TranscriptionResult>;

    /// Get the provider name
    fn name(&self) -> &str;
}
