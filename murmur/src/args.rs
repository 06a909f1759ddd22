use std::path::PathBuf;

use clap::Parser;

/// Murmur voice relay
#[derive(Debug, Parser)]
#[command(name = "murmur", about = "HTTP relay for speech synthesis, transcription, and text generation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "murmur.toml", env = "MURMUR_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "MURMUR_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
