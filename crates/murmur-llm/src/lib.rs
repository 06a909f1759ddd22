//! Text generation gateway
//!
//! Forwards a single prompt to Gemini and reports the generated text with a
//! whitespace token estimate.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod protocol;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use murmur_core::ServiceError;

pub use error::LlmError;
pub use provider::{TextGenerator, gemini::GeminiProvider};
pub use server::{LlmServerBuilder, Server};
pub use types::{GenerationParams, GenerationRequest, GenerationResult};

/// Build the text generation server from configuration
pub fn build_server(config: &murmur_config::Config, client: reqwest::Client) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        LlmServerBuilder::new(config, client)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize LLM server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for text generation
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/llm/query", post(query))
}

/// Handle text generation requests
async fn query(
    State(server): State<Arc<Server>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, ServiceError> {
    tracing::debug!(model = ?request.model, "LLM query handler called");

    let result = server.generate(request).await?;

    tracing::debug!(tokens = result.tokens_used, "LLM query complete");

    Ok(Json(result))
}
