use std::sync::Arc;

use crate::{
    error::TtsError,
    provider::{Synthesizer, murf::MurfProvider},
    types::{SynthesisRequest, SynthesisResult, Voice},
};

/// TTS server that fills in voice defaults and calls the provider
pub struct Server {
    synthesizer: Arc<dyn Synthesizer>,
    default_voice: Voice,
}

impl Server {
    pub fn new(synthesizer: Arc<dyn Synthesizer>, default_voice: Voice) -> Self {
        Self {
            synthesizer,
            default_voice,
        }
    }

    /// Synthesize the request text, echoing the effective parameters back
    pub async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<SynthesisResult> {
        let voice = Voice {
            voice_id: request
                .voice_id
                .unwrap_or_else(|| self.default_voice.voice_id.clone()),
            style: request.style.unwrap_or_else(|| self.default_voice.style.clone()),
        };

        let audio = self.synthesizer.synthesize(&request.text, &voice).await?;

        Ok(SynthesisResult {
            audio_url: audio.audio_url,
            text: request.text,
            voice_id: voice.voice_id,
            style: voice.style,
        })
    }

    /// Shared handle to the underlying provider
    pub fn synthesizer(&self) -> Arc<dyn Synthesizer> {
        Arc::clone(&self.synthesizer)
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a murmur_config::Config,
    client: reqwest::Client,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a murmur_config::Config, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let tts = &self.config.tts;

        let api_key = tts
            .api_key
            .clone()
            .ok_or_else(|| TtsError::ConfigError("API key required for TTS provider 'murf'".to_string()))?;

        let provider = MurfProvider::new(self.client, api_key, tts.base_url.clone());

        tracing::debug!("TTS server initialized with provider: {}", provider.name());

        Ok(Server::new(
            Arc::new(provider),
            Voice {
                voice_id: tts.default_voice_id.clone(),
                style: tts.default_style.clone(),
            },
        ))
    }
}
