//! # Health Probe
//!
//! `GET /health` reports liveness together with what the process loaded:
//! the term extractor, the rule set and the request counters.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::middleware::metrics::MetricsSnapshot;
use crate::state::{AppState, SERVICE_NAME};

/// Health probe response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"UP"` while the process serves requests.
    pub status: String,
    pub service: String,
    /// Term extractor identifier.
    pub model: String,
    /// Name of the loaded rule set.
    pub ruleset: String,
    pub version: String,
    pub metrics: MetricsSnapshot,
}

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health — Liveness and loaded configuration.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: SERVICE_NAME.to_string(),
        model: state.engine.extractor_name().to_string(),
        ruleset: state.engine.rules().name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        metrics: state.metrics.snapshot(),
    })
}
