use serde::{Deserialize, Serialize};

/// Body of `POST /llm/query`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Prompt text
    pub text: String,
    /// Model identifier (e.g. "gemini-1.5-flash")
    #[serde(default)]
    pub model: Option<String>,
    /// Maximum output tokens
    #[serde(default, alias = "max_tokens")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Fully resolved generation parameters handed to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response of `POST /llm/query`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Generated text
    pub response: String,
    /// Prompt as received
    pub input: String,
    pub model: String,
    /// Whitespace-delimited word count of `response`, not a tokenizer count
    pub tokens_used: usize,
}

/// Approximate token count by splitting on whitespace
pub fn approximate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
