use serde::{Deserialize, Serialize};

/// Body of `POST /api/text-to-speech`
///
/// Omitted voice settings fall back to the configured defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    /// Text to synthesize
    pub text: String,
    /// Provider voice identifier (e.g. "en-US-ken")
    #[serde(default, alias = "voice_id")]
    pub voice_id: Option<String>,
    /// Speaking style (e.g. "Conversational")
    #[serde(default)]
    pub style: Option<String>,
}

/// Voice selection passed to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub voice_id: String,
    pub style: String,
}

/// What a provider hands back for one synthesis call
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Where the provider hosts the rendered audio
    pub audio_url: String,
}

/// Response of `POST /api/text-to-speech`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResult {
    pub audio_url: String,
    pub text: String,
    pub voice_id: String,
    pub style: String,
}
