//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use murmur_config::{Config, ServerConfig};
use secrecy::SecretString;

use super::mock_vendor::MockVendor;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder with every provider pointed at the mock vendor
    pub fn new(vendor: &MockVendor) -> Self {
        let mut config = Config {
            server: ServerConfig {
                listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                ..ServerConfig::default()
            },
            ..Config::default()
        };

        config.tts.api_key = Some(SecretString::from(super::mock_vendor::MURF_KEY));
        config.tts.base_url = Some(vendor.murf_url());

        config.stt.api_key = Some(SecretString::from(super::mock_vendor::ASSEMBLYAI_KEY));
        config.stt.base_url = Some(vendor.assemblyai_url());
        config.stt.poll_interval = "10ms".to_string();
        config.stt.poll_timeout = "5s".to_string();

        config.llm.api_key = Some(SecretString::from(super::mock_vendor::GEMINI_KEY));
        config.llm.base_url = Some(vendor.gemini_url());

        Self { config }
    }

    /// Serve static files from `dir`
    pub fn with_static_dir(mut self, dir: &Path) -> Self {
        self.config.server.static_dir = dir.to_path_buf();
        self
    }

    /// Use a different fixed voice for the echo relay
    pub fn with_echo_voice(mut self, voice_id: &str) -> Self {
        self.config.echo.voice_id = voice_id.to_owned();
        self
    }

    /// Send a key the mock Murf endpoint rejects
    pub fn with_wrong_murf_key(mut self) -> Self {
        self.config.tts.api_key = Some(SecretString::from("wrong-key"));
        self
    }

    /// Give up on transcripts almost immediately
    pub fn with_poll_timeout(mut self, timeout: &str) -> Self {
        self.config.stt.poll_timeout = timeout.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config.validate().expect("test config must validate");
        self.config
    }
}
