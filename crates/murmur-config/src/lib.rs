#![allow(clippy::must_use_candidate)]

pub mod echo;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod stt;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use echo::*;
pub use health::*;
pub use llm::*;
pub use server::*;
pub use stt::*;
pub use telemetry::*;
pub use tts::*;

/// Top-level Murmur configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Speech synthesis provider (Murf)
    #[serde(default)]
    pub tts: TtsConfig,
    /// Transcription provider (AssemblyAI)
    #[serde(default)]
    pub stt: SttConfig,
    /// Text generation provider (Gemini)
    #[serde(default)]
    pub llm: LlmConfig,
    /// Echo relay voice settings
    #[serde(default)]
    pub echo: EchoConfig,
}
