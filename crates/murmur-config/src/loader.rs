use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a referenced environment
    /// variable is unset, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], minus file access
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration eagerly so that a missing key fails
    /// startup instead of the first request
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending setting
    pub fn validate(&self) -> anyhow::Result<()> {
        require_api_key("tts", self.tts.api_key.as_ref())?;
        require_api_key("stt", self.stt.api_key.as_ref())?;
        require_api_key("llm", self.llm.api_key.as_ref())?;
        self.validate_stt_config()?;
        self.validate_llm_config()?;
        Ok(())
    }

    fn validate_stt_config(&self) -> anyhow::Result<()> {
        let interval = duration_str::parse(&self.stt.poll_interval)
            .map_err(|e| anyhow::anyhow!("invalid stt.poll_interval '{}': {e}", self.stt.poll_interval))?;
        let timeout = duration_str::parse(&self.stt.poll_timeout)
            .map_err(|e| anyhow::anyhow!("invalid stt.poll_timeout '{}': {e}", self.stt.poll_timeout))?;

        if interval.is_zero() {
            anyhow::bail!("stt.poll_interval must be greater than 0");
        }

        if timeout < interval {
            anyhow::bail!("stt.poll_timeout must not be shorter than stt.poll_interval");
        }

        Ok(())
    }

    fn validate_llm_config(&self) -> anyhow::Result<()> {
        if self.llm.default_max_tokens == 0 {
            anyhow::bail!("llm.default_max_tokens must be greater than 0");
        }

        if !(0.0..=2.0).contains(&self.llm.default_temperature) {
            anyhow::bail!(
                "llm.default_temperature must be between 0.0 and 2.0, got {}",
                self.llm.default_temperature
            );
        }

        Ok(())
    }
}

fn require_api_key(section: &str, key: Option<&SecretString>) -> anyhow::Result<()> {
    match key {
        Some(key) if !key.expose_secret().trim().is_empty() => Ok(()),
        Some(_) => anyhow::bail!("{section}.api_key must not be empty"),
        None => anyhow::bail!("{section}.api_key is required"),
    }
}
