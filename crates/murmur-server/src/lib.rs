mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use murmur_config::Config;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Constructs the shared HTTP client and every provider up front so a
    /// bad configuration fails here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or any provider fails to initialize
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let client = murmur_core::http_client()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        let tts_state = tts::build_server(config, client.clone())?;
        let transcriber = stt::build_transcriber(config, client.clone())?;
        let echo_state = echo::build_relay(config, transcriber, tts_state.synthesizer());
        let llm_state = murmur_llm::build_server(config, client)?;

        let static_dir = &config.server.static_dir;

        // Homepage and static assets
        let mut app = Router::new()
            .route_service("/", ServeFile::new(static_dir.join("index.html")))
            .nest_service("/static", ServeDir::new(static_dir));

        // Health check
        if config.server.health.enabled {
            let report = Arc::new(health::HealthReport::new(&config.server.health));
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler).with_state(report),
            );
        }

        // TTS routes
        app = app.merge(tts::endpoint_router().with_state(tts_state));

        // Echo routes
        app = app.merge(echo::endpoint_router().with_state(echo_state));

        // LLM routes
        app = app.merge(murmur_llm::endpoint_router().with_state(llm_state));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
