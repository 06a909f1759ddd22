#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod types;

use std::sync::Arc;

pub use error::{Result, SttError};
pub use provider::{
    Transcriber,
    assemblyai::{AssemblyAiProvider, PollSettings},
};
pub use types::{TranscriptStatus, TranscriptionResult};

/// Build the transcription provider from configuration
///
/// # Errors
///
/// Returns an error if the API key is missing or the poll durations do not parse
pub fn build_transcriber(
    config: &murmur_config::Config,
    client: reqwest::Client,
) -> anyhow::Result<Arc<dyn Transcriber>> {
    let stt = &config.stt;

    let api_key = stt
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Failed to initialize STT provider: API key required for 'assemblyai'"))?;

    let poll = PollSettings {
        interval: parse_duration("stt.poll_interval", &stt.poll_interval)?,
        timeout: parse_duration("stt.poll_timeout", &stt.poll_timeout)?,
    };

    let provider = AssemblyAiProvider::new(client, api_key, stt.base_url.clone(), poll);

    tracing::debug!("STT provider initialized: {}", provider.name());

    Ok(Arc::new(provider))
}

fn parse_duration(field: &str, value: &str) -> anyhow::Result<std::time::Duration> {
    duration_str::parse(value).map_err(|e| anyhow::anyhow!("invalid {field} '{value}': {e}"))
}
