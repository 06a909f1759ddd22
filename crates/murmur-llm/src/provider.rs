pub mod gemini;

use async_trait::async_trait;

use crate::{error::LlmError, types::GenerationParams};

/// Trait for text generation provider implementations
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt
    ///
    /// Returns whatever text the provider produced, possibly empty; the
    /// caller decides what an empty answer means.
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError>;

    /// Get the provider name
    fn name(&self) -> &str;
}
