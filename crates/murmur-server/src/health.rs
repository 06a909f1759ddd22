use std::sync::Arc;

use axum::{Json, extract::State};
use murmur_config::HealthConfig;
use serde::Serialize;

/// Payload of the health endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    status: String,
    day: u32,
    endpoint: String,
    sdk_status: &'static str,
}

impl HealthReport {
    /// Providers are validated before the router exists, so once this is
    /// built every SDK is ready
    pub fn new(config: &HealthConfig) -> Self {
        Self {
            status: config.status.clone(),
            day: config.day,
            endpoint: config.endpoint.clone(),
            sdk_status: "Ready",
        }
    }
}

/// Health check handler
pub async fn health_handler(State(report): State<Arc<HealthReport>>) -> Json<HealthReport> {
    Json(report.as_ref().clone())
}
