use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    types::{SynthesizedAudio, Voice},
};

use super::Synthesizer;

const DEFAULT_MURF_API_URL: &str = "https://api.murf.ai/v1";

/// Murf TTS provider
pub struct MurfProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl MurfProvider {
    pub fn new(client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_MURF_API_URL.to_string());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct MurfRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    style: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MurfResponse {
    #[serde(default)]
    audio_file: Option<String>,
    #[serde(default)]
    audio_length_in_seconds: Option<f64>,
}

#[async_trait]
impl Synthesizer for MurfProvider {
    async fn synthesize(&self, text: &str, voice: &Voice) -> crate::error::Result<SynthesizedAudio> {
        let url = format!("{}/speech/generate", self.base_url);

        tracing::debug!(
            "Murf TTS request: voice={}, style={}, input_len={}",
            voice.voice_id,
            voice.style,
            text.len(),
        );

        let body = MurfRequest {
            text,
            voice_id: &voice.voice_id,
            style: &voice.style,
        };

        let response = self
            .client
            .post(&url)
            .header("api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Murf request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to Murf: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Murf API error ({status}): {error_text}");

            return Err(TtsError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: MurfResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Murf response: {e}");
            TtsError::InvalidResponse(format!("Failed to parse Murf response: {e}"))
        })?;

        let audio_url = result
            .audio_file
            .filter(|url| !url.is_empty())
            .ok_or_else(|| TtsError::InvalidResponse("Murf response did not include an audio file".to_string()))?;

        tracing::debug!(
            length_seconds = ?result.audio_length_in_seconds,
            "Murf TTS synthesis complete"
        );

        Ok(SynthesizedAudio { audio_url })
    }

    fn name(&self) -> &'static str {
        "murf"
    }
}
