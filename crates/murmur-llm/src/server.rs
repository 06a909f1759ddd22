use std::sync::Arc;

use crate::{
    error::LlmError,
    provider::{TextGenerator, gemini::GeminiProvider},
    types::{GenerationParams, GenerationRequest, GenerationResult, approximate_tokens},
};

/// Text generation server that applies configured defaults
pub struct Server {
    generator: Arc<dyn TextGenerator>,
    defaults: GenerationParams,
}

impl Server {
    pub fn new(generator: Arc<dyn TextGenerator>, defaults: GenerationParams) -> Self {
        Self { generator, defaults }
    }

    /// Run one prompt through the provider
    ///
    /// An empty or whitespace-only completion is reported as
    /// [`LlmError::EmptyResponse`], separate from transport failures.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, LlmError> {
        let params = GenerationParams {
            model: request.model.unwrap_or_else(|| self.defaults.model.clone()),
            max_tokens: request.max_tokens.unwrap_or(self.defaults.max_tokens),
            temperature: request.temperature.unwrap_or(self.defaults.temperature),
        };

        let response = self.generator.generate(&request.text, &params).await?;

        if response.trim().is_empty() {
            tracing::warn!(model = %params.model, "provider returned no text");
            return Err(LlmError::EmptyResponse);
        }

        Ok(GenerationResult {
            tokens_used: approximate_tokens(&response),
            response,
            input: request.text,
            model: params.model,
        })
    }
}

/// Builder for constructing the text generation server from configuration
pub struct LlmServerBuilder<'a> {
    config: &'a murmur_config::Config,
    client: reqwest::Client,
}

impl<'a> LlmServerBuilder<'a> {
    pub const fn new(config: &'a murmur_config::Config, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub fn build(self) -> Result<Server, LlmError> {
        let llm = &self.config.llm;

        let api_key = llm
            .api_key
            .clone()
            .ok_or_else(|| LlmError::Config("API key required for LLM provider 'gemini'".to_string()))?;

        let provider = GeminiProvider::new(self.client, api_key, llm.base_url.as_deref())?;

        tracing::debug!("LLM server initialized with provider: {}", provider.name());

        Ok(Server::new(
            Arc::new(provider),
            GenerationParams {
                model: llm.default_model.clone(),
                max_tokens: llm.default_max_tokens,
                temperature: llm.default_temperature,
            },
        ))
    }
}
