//! Google Gemini provider implementation

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::TextGenerator;
use crate::error::LlmError;
use crate::protocol::{GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiRequestPart, GeminiResponse};
use crate::types::GenerationParams;

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini text generation provider
pub struct GeminiProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl GeminiProvider {
    /// Create a provider, validating the base URL
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the base URL does not parse
    pub fn new(client: Client, api_key: SecretString, base_url: Option<&str>) -> Result<Self, LlmError> {
        let base_url = Url::parse(base_url.unwrap_or(DEFAULT_BASE_URL))
            .map_err(|e| LlmError::Config(format!("invalid Gemini base URL: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Build the `generateContent` endpoint URL for a model
    ///
    /// The model name is pushed as a single path segment, so `/`, `?` and
    /// `#` in it are percent-encoded and cannot leave `/models/`.
    fn generate_url(&self, model: &str) -> Result<Url, LlmError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LlmError::Config("Gemini base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push("models")
            .push(&format!("{model}:generateContent"));

        Ok(url)
    }
}

/// Convert a send failure into an upstream error with the URL removed
///
/// The request URL carries the API key as a query parameter, so neither the
/// log line nor the returned message may include it.
fn send_error(error: reqwest::Error) -> LlmError {
    let error = error.without_url();
    tracing::error!(provider = "gemini", error = %error, "upstream request failed");
    LlmError::Upstream(error.to_string())
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, LlmError> {
        let wire_request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiRequestPart { text: prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: params.max_tokens,
                temperature: params.temperature,
            },
        };

        let response = self
            .client
            .post(self.generate_url(&params.model)?)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&wire_request)
            .send()
            .await
            .map_err(send_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = "gemini", status = %status, "upstream returned error");
            return Err(LlmError::Upstream(format!("provider returned {status}: {body}")));
        }

        let wire_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Upstream(format!("failed to parse response: {}", e.without_url())))?;

        Ok(wire_response.text())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
