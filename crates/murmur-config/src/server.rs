use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;

use crate::health::HealthConfig;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Directory holding `index.html` and the rest of the static assets
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default)]
    pub health: HealthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            static_dir: default_static_dir(),
            health: HealthConfig::default(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}
