//! # Analysis Endpoint
//!
//! `POST /analyze` scores one free-text disclosure. Handlers stay thin:
//! all scoring lives in `esg-engine`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use esg_engine::{AnalysisRequest, AnalysisResult};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Analysis request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Disclosure text. Required; may be empty.
    #[serde(default)]
    pub text: Option<String>,
}

impl From<AnalyzeRequest> for AnalysisRequest {
    fn from(req: AnalyzeRequest) -> Self {
        AnalysisRequest { text: req.text }
    }
}

/// Analysis result: `overallAssessment`, `pillarAssessment` (keyed `E`,
/// `S`, `G`), `keyIncidents`, `governanceAssessment`, `analystSummary`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct AnalysisResponse(pub AnalysisResult);

/// Build the analysis router.
pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

/// POST /analyze — Score a text disclosure.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "ESG risk assessment", body = AnalysisResponse),
        (status = 400, description = "Malformed JSON body", body = crate::error::ErrorBody),
        (status = 422, description = "Missing or null text", body = crate::error::ErrorBody),
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let req: AnalysisRequest = extract_json(body)?.into();
    let result = state.engine.analyze_request(&req)?;
    state.metrics.record_analysis();
    Ok(Json(AnalysisResponse(result)))
}
