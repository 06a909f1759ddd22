use secrecy::SecretString;
use serde::Deserialize;

/// AssemblyAI transcription configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// API key sent in the `authorization` header
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Delay between transcript status polls (e.g. "500ms", "3s")
    #[serde(default = "default_poll_interval")]
    pub poll_interval: String,
    /// Give up waiting for a terminal transcript status after this long
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            poll_interval: default_poll_interval(),
            poll_timeout: default_poll_timeout(),
        }
    }
}

fn default_poll_interval() -> String {
    "3s".to_string()
}

fn default_poll_timeout() -> String {
    "5m".to_string()
}
