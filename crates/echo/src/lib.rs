//! Echo relay: transcribe an uploaded recording and speak it back

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod relay;
mod request;

use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, extract::State, routing::post};
use murmur_core::ServiceError;

pub use relay::{EchoResult, NO_SPEECH_TRANSCRIPT, Relay};
use request::{BODY_LIMIT_BYTES, ExtractAudio};

/// Build the echo relay from configuration and the already built providers
pub fn build_relay(
    config: &murmur_config::Config,
    transcriber: Arc<dyn stt::Transcriber>,
    synthesizer: Arc<dyn tts::Synthesizer>,
) -> Arc<Relay> {
    let voice = tts::Voice {
        voice_id: config.echo.voice_id.clone(),
        style: config.echo.style.clone(),
    };

    tracing::debug!(
        transcriber = transcriber.name(),
        synthesizer = synthesizer.name(),
        voice = %voice.voice_id,
        "Echo relay initialized"
    );

    Arc::new(Relay::new(transcriber, synthesizer, voice))
}

/// Create the endpoint router for the echo relay
pub fn endpoint_router() -> Router<Arc<Relay>> {
    Router::new()
        .route("/api/tts/echo", post(echo))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}

/// Handle echo requests
async fn echo(State(relay): State<Arc<Relay>>, ExtractAudio(audio): ExtractAudio) -> Result<Json<EchoResult>, ServiceError> {
    tracing::debug!("Echo handler called with {} bytes", audio.len());

    let result = relay.echo(audio).await?;

    tracing::debug!(speech = result.audio_url.is_some(), "Echo complete");

    Ok(Json(result))
}
