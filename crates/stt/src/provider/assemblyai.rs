use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{error::SttError, types::TranscriptionResult};

use super::Transcriber;

const DEFAULT_ASSEMBLYAI_API_URL: &str = "https://api.assemblyai.com/v2";

/// How often and for how long to poll a queued transcript
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

/// `AssemblyAI` STT provider
///
/// Transcription is a three step exchange: upload the audio, create a
/// transcript job for the uploaded file, then poll the job until it
/// completes or fails.
pub struct AssemblyAiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    poll: PollSettings,
}

impl AssemblyAiProvider {
    pub fn new(client: Client, api_key: SecretString, base_url: Option<String>, poll: PollSettings) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ASSEMBLYAI_API_URL.to_string());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            poll,
        }
    }

    async fn upload(&self, audio: Vec<u8>) -> crate::error::Result<String> {
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header("authorization", self.api_key.expose_secret())
            .header("content-type", "application/octet-stream")
            .body(audio)
            .send()
            .await
            .map_err(|e| connection_error("upload", &e))?;

        let upload: UploadResponse = decode(response, "upload").await?;

        Ok(upload.upload_url)
    }

    async fn submit(&self, audio_url: &str) -> crate::error::Result<TranscriptResponse> {
        let response = self
            .client
            .post(format!("{}/transcript", self.base_url))
            .header("authorization", self.api_key.expose_secret())
            .json(&TranscriptRequest { audio_url })
            .send()
            .await
            .map_err(|e| connection_error("transcript", &e))?;

        decode(response, "transcript").await
    }

    async fn fetch(&self, id: &str) -> crate::error::Result<TranscriptResponse> {
        let response = self
            .client
            .get(format!("{}/transcript/{id}", self.base_url))
            .header("authorization", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| connection_error("transcript poll", &e))?;

        decode(response, "transcript poll").await
    }

    async fn wait_for_terminal(&self, mut transcript: TranscriptResponse) -> crate::error::Result<TranscriptResponse> {
        while !transcript.status.is_terminal() {
            tracing::trace!(id = %transcript.id, status = ?transcript.status, "transcript pending");
            tokio::time::sleep(self.poll.interval).await;
            transcript = self.fetch(&transcript.id).await?;
        }

        Ok(transcript)
    }
}

#[derive(serde::Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: JobStatus,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl JobStatus {
    const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

impl From<TranscriptResponse> for TranscriptionResult {
    fn from(transcript: TranscriptResponse) -> Self {
        match transcript.status {
            JobStatus::Error => Self::failed(
                transcript
                    .error
                    .unwrap_or_else(|| "transcription ended with an unspecified error".to_string()),
            ),
            _ => Self::completed(transcript.text.unwrap_or_default()),
        }
    }
}

fn connection_error(step: &str, e: &reqwest::Error) -> SttError {
    tracing::error!("AssemblyAI {step} request failed: {e}");
    SttError::ConnectionError(format!("Failed to send {step} request to AssemblyAI: {e}"))
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response, step: &str) -> crate::error::Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!("AssemblyAI {step} error ({status}): {error_text}");

        return Err(SttError::ProviderApiError {
            status: status.as_u16(),
            message: error_text,
        });
    }

    response.json().await.map_err(|e| {
        tracing::error!("Failed to parse AssemblyAI {step} response: {e}");
        SttError::InvalidResponse(format!("Failed to parse AssemblyAI {step} response: {e}"))
    })
}

#[async_trait]
impl Transcriber for AssemblyAiProvider {
    async fn transcribe(&self, audio: Vec<u8>) -> crate::error::Result<TranscriptionResult> {
        tracing::debug!("AssemblyAI transcription request: {} bytes", audio.len());

        let upload_url = self.upload(audio).await?;
        let transcript = self.submit(&upload_url).await?;
        let id = transcript.id.clone();

        let transcript = tokio::time::timeout(self.poll.timeout, self.wait_for_terminal(transcript))
            .await
            .map_err(|_| SttError::PollTimeout {
                id: id.clone(),
                waited_secs: self.poll.timeout.as_secs(),
            })??;

        tracing::debug!(%id, status = ?transcript.status, "AssemblyAI transcription finished");

        Ok(transcript.into())
    }

    fn name(&self) -> &'static str {
        "assemblyai"
    }
}
