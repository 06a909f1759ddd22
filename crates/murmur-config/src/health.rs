use serde::Deserialize;

/// Health check endpoint configuration
///
/// The reported fields are echoed verbatim in the health payload.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_day")]
    pub day: u32,
    /// Primary endpoint advertised to clients
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_path(),
            status: default_status(),
            day: default_day(),
            endpoint: default_endpoint(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "/api/health".to_string()
}

fn default_status() -> String {
    "AI Voice Agent Running!".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_day() -> u32 {
    2
}

fn default_endpoint() -> String {
    "/api/text-to-speech".to_string()
}
