//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PulseESG AI Service",
        description = "Rule-based ESG risk scoring: per-pillar scores, key incidents, governance view and analyst summary for free-text disclosures.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::analyze::analyze,
        crate::routes::health::health,
    ),
    components(schemas(
        crate::routes::analyze::AnalyzeRequest,
        crate::routes::analyze::AnalysisResponse,
        crate::routes::health::HealthResponse,
        crate::middleware::metrics::MetricsSnapshot,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "analysis", description = "ESG risk analysis"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/analyze"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
