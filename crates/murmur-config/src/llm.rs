use secrecy::SecretString;
use serde::Deserialize;

/// Gemini text generation configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// API key passed as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_model: default_model(),
            default_max_tokens: default_max_tokens(),
            default_temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    1000
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f32 {
    0.7
}
