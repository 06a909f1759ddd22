use serde::Deserialize;

use crate::tts::{default_style, default_voice_id};

/// Fixed voice settings for the echo relay
///
/// Callers of the echo endpoint cannot pick a voice; these apply to every
/// synthesized echo.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoConfig {
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            voice_id: default_voice_id(),
            style: default_style(),
        }
    }
}
