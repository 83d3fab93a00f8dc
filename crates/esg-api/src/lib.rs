//! # esg-api — HTTP Service for PulseESG
//!
//! Thin Axum layer over [`esg_engine::EsgEngine`]. One engine is built at
//! bootstrap and shared read-only by every request.
//!
//! ## API Surface
//!
//! | Route | Module | Purpose |
//! |---|---|---|
//! | `POST /analyze` | [`routes::analyze`] | Score a text disclosure |
//! | `GET /health` | [`routes::health`] | Liveness, loaded rule set, counters |
//! | `GET /openapi.json` | [`openapi`] | Generated OpenAPI document |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer (permissive) → TraceLayer → MetricsMiddleware → Handler
//! ```
//!
//! Errors from every route use the [`error::ErrorBody`] shape.

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .merge(routes::analyze::router())
        .merge(routes::health::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(CorsLayer::permissive())
        .layer(axum::Extension(metrics))
        .with_state(state)
}
