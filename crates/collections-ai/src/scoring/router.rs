use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assignment::Assignment;
use super::cache::PredictionCache;
use super::domain::{AgencyRecord, AssignmentConstraints, CaseRecord, ValidationError};
use super::prediction::CasePrediction;
use super::service::{AgencyScorecard, ScoringService};

#[derive(Debug, Deserialize)]
pub struct BatchPredictionRequest {
    pub cases: Vec<CaseRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub cases: Vec<CaseRecord>,
    #[serde(rename = "availableDCAs")]
    pub available_dcas: Vec<AgencyRecord>,
    #[serde(default)]
    pub constraints: AssignmentConstraints,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictionResponse {
    #[serde(flatten)]
    prediction: CasePrediction,
    prediction_timestamp: DateTime<Utc>,
}

impl From<CasePrediction> for PredictionResponse {
    fn from(prediction: CasePrediction) -> Self {
        Self {
            prediction,
            prediction_timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScorecardResponse {
    #[serde(flatten)]
    scorecard: AgencyScorecard,
    score_timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct OptimizationResponse {
    assignments: Vec<Assignment>,
}

/// Router builder exposing the scoring endpoints.
pub fn scoring_router<C>(service: Arc<ScoringService<C>>) -> Router
where
    C: PredictionCache + 'static,
{
    Router::new()
        .route("/api/v1/predict/recovery", post(predict_handler::<C>))
        .route("/api/v1/predict/batch", post(batch_handler::<C>))
        .route("/api/v1/score/dca", post(score_dca_handler::<C>))
        .route("/api/v1/optimize/assignment", post(optimize_handler::<C>))
        .route("/api/v1/engine/status", get(status_handler::<C>))
        .with_state(service)
}

pub(crate) async fn predict_handler<C>(
    State(service): State<Arc<ScoringService<C>>>,
    axum::Json(case): axum::Json<CaseRecord>,
) -> Response
where
    C: PredictionCache + 'static,
{
    match service.predict(&case) {
        Ok(prediction) => {
            (StatusCode::OK, axum::Json(PredictionResponse::from(prediction))).into_response()
        }
        Err(error) => validation_rejection(error),
    }
}

pub(crate) async fn batch_handler<C>(
    State(service): State<Arc<ScoringService<C>>>,
    axum::Json(request): axum::Json<BatchPredictionRequest>,
) -> Response
where
    C: PredictionCache + 'static,
{
    let predictions: Vec<PredictionResponse> = service
        .predict_batch(&request.cases)
        .into_iter()
        .map(PredictionResponse::from)
        .collect();
    (StatusCode::OK, axum::Json(predictions)).into_response()
}

pub(crate) async fn score_dca_handler<C>(
    State(service): State<Arc<ScoringService<C>>>,
    axum::Json(agency): axum::Json<AgencyRecord>,
) -> Response
where
    C: PredictionCache + 'static,
{
    match service.score_agency(&agency) {
        Ok(scorecard) => {
            let response = ScorecardResponse {
                scorecard,
                score_timestamp: Utc::now(),
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => validation_rejection(error),
    }
}

pub(crate) async fn optimize_handler<C>(
    State(service): State<Arc<ScoringService<C>>>,
    axum::Json(request): axum::Json<OptimizationRequest>,
) -> Response
where
    C: PredictionCache + 'static,
{
    match service.optimize_assignments(&request.cases, &request.available_dcas, &request.constraints)
    {
        Ok(assignments) => {
            (StatusCode::OK, axum::Json(OptimizationResponse { assignments })).into_response()
        }
        Err(error) => validation_rejection(error),
    }
}

pub(crate) async fn status_handler<C>(
    State(service): State<Arc<ScoringService<C>>>,
) -> Response
where
    C: PredictionCache + 'static,
{
    (StatusCode::OK, axum::Json(service.status())).into_response()
}

fn validation_rejection(error: ValidationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
