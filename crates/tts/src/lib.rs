#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use murmur_core::{ServiceError, Stage};

pub use error::{Result, TtsError};
pub use provider::{Synthesizer, murf::MurfProvider};
pub use server::{Server, TtsServerBuilder};
pub use types::{SynthesisRequest, SynthesisResult, SynthesizedAudio, Voice};

/// Build the TTS server from configuration
pub fn build_server(config: &murmur_config::Config, client: reqwest::Client) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config, client)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for TTS
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/text-to-speech", post(synthesize))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    Json(request): Json<SynthesisRequest>,
) -> std::result::Result<Json<SynthesisResult>, ServiceError> {
    tracing::debug!(input_len = request.text.len(), "TTS speech handler called");

    let result = server
        .synthesize(request)
        .await
        .map_err(|e| ServiceError::transport(Stage::Synthesis, e))?;

    tracing::debug!("Speech synthesis complete");

    Ok(Json(result))
}
