use std::sync::Arc;

use murmur_core::{ServiceError, Stage};
use serde::{Deserialize, Serialize};
use stt::{TranscriptStatus, Transcriber};
use tts::{Synthesizer, Voice};

/// Transcript reported when the recording contained no speech
pub const NO_SPEECH_TRANSCRIPT: &str = "(No speech detected)";

/// Response of `POST /api/tts/echo`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EchoResult {
    /// `None` when nothing was spoken, so nothing was synthesized
    pub audio_url: Option<String>,
    pub transcript: String,
}

/// Chains transcription into synthesis with a fixed voice
pub struct Relay {
    transcriber: Arc<dyn Transcriber>,
    synthesizer: Arc<dyn Synthesizer>,
    voice: Voice,
}

impl Relay {
    pub fn new(transcriber: Arc<dyn Transcriber>, synthesizer: Arc<dyn Synthesizer>, voice: Voice) -> Self {
        Self {
            transcriber,
            synthesizer,
            voice,
        }
    }

    /// Transcribe `audio` and synthesize the transcript
    ///
    /// A transcript the provider marks as failed stops the relay before
    /// synthesis and is reported against the transcription stage. Silence
    /// is a successful outcome with no audio. Every other failure, in
    /// either step, is reported against the echo stage as a whole.
    pub async fn echo(&self, audio: Vec<u8>) -> Result<EchoResult, ServiceError> {
        let transcript = self
            .transcriber
            .transcribe(audio)
            .await
            .map_err(|e| ServiceError::transport(Stage::Echo, e))?;

        if transcript.status == TranscriptStatus::Error {
            let detail = transcript.error.unwrap_or_default();
            tracing::warn!(%detail, "transcription finished with error status");

            return Err(ServiceError::Upstream {
                stage: Stage::Transcription,
                message: detail,
            });
        }

        if transcript.is_blank() {
            tracing::debug!("no speech detected, skipping synthesis");

            return Ok(EchoResult {
                audio_url: None,
                transcript: NO_SPEECH_TRANSCRIPT.to_string(),
            });
        }

        let audio = self
            .synthesizer
            .synthesize(&transcript.text, &self.voice)
            .await
            .map_err(|e| ServiceError::transport(Stage::Echo, e))?;

        Ok(EchoResult {
            audio_url: Some(audio.audio_url),
            transcript: transcript.text,
        })
    }
}
