pub mod murf;

use async_trait::async_trait;

use crate::types::{SynthesizedAudio, Voice};

/// Trait for TTS provider implementations
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` with the given voice
    async fn synthesize(&self, text: &str, voice: &Voice) -> crate::error::Result<SynthesizedAudio>;

    /// Get the provider name
    fn name(&self) -> &str;
}
