use std::fmt;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Trait for errors that can be converted to HTTP responses
///
/// Domain crates stay free of status codes; only the boundary consults this.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// The request stage a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `/api/text-to-speech`
    Synthesis,
    /// The transcription step of the echo relay
    Transcription,
    /// The echo relay as a whole
    Echo,
    /// `/llm/query`
    Generation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Synthesis => "TTS generation",
            Self::Transcription => "Transcription",
            Self::Echo => "Echo Bot",
            Self::Generation => "LLM query",
        };

        f.write_str(label)
    }
}

/// Failure of a relay request
///
/// Every upstream variant surfaces as a 500 carrying the stage name and the
/// upstream description; the variants exist so handlers and tests can tell
/// the triggering conditions apart.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The provider client failed: network error, non-success status or an
    /// undecodable body
    #[error("{stage} failed: {message}")]
    Transport { stage: Stage, message: String },

    /// The provider completed the call but reported a failed job
    #[error("{stage} failed: {message}")]
    Upstream { stage: Stage, message: String },

    /// The provider succeeded without producing anything usable
    #[error("{stage} failed: {reason}")]
    UpstreamEmptyResult { stage: Stage, reason: String },

    /// The request did not have the expected shape
    #[error("Invalid request: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Wrap a provider error as a transport failure of `stage`
    pub fn transport(stage: Stage, error: impl fmt::Display) -> Self {
        Self::Transport {
            stage,
            message: error.to_string(),
        }
    }

    /// The stage this error is attributed to, if any
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Transport { stage, .. } | Self::Upstream { stage, .. } | Self::UpstreamEmptyResult { stage, .. } => {
                Some(*stage)
            }
            Self::Validation(_) => None,
        }
    }
}

impl HttpError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Transport { .. } | Self::Upstream { .. } | Self::UpstreamEmptyResult { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(stage = ?self.stage(), error = %self, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.client_message(),
            }),
        )
            .into_response()
    }
}
