use std::time::Duration;

use reqwest::Client;

/// Build the HTTP client shared by every vendor provider
///
/// Constructed once at startup and cloned into each provider; clones share
/// the same connection pool.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn http_client() -> reqwest::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
