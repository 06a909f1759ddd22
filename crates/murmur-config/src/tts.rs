use secrecy::SecretString;
use serde::Deserialize;

/// Murf speech synthesis configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// API key sent in the `api-key` header
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Voice used when a request does not name one
    #[serde(default = "default_voice_id")]
    pub default_voice_id: String,
    /// Style used when a request does not name one
    #[serde(default = "default_style")]
    pub default_style: String,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_voice_id: default_voice_id(),
            default_style: default_style(),
        }
    }
}

pub(crate) fn default_voice_id() -> String {
    "en-US-ken".to_string()
}

pub(crate) fn default_style() -> String {
    "Conversational".to_string()
}
