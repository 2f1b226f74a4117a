use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;

use super::domain::PatientProfile;
use super::engine::{AssessmentOutcome, RiskEngine};
use super::intake::ClinicalIntake;
use super::recommendations::recommend;
use super::report::Report;
use super::scoring::{ComponentScores, ScoreComponent};
use super::RiskCategory;
use crate::error::AppError;

/// Router builder exposing the scoring engine over HTTP.
pub fn assessment_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/api/v1/risk/assessments", post(assess_handler))
        .route("/api/v1/risk/assessments/text", post(assess_text_handler))
        .route(
            "/api/v1/risk/recommendations/:category",
            get(recommendations_handler),
        )
        .with_state(engine)
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub report: Report,
    pub component_scores: ComponentScores,
    pub breakdown: Vec<ScoreComponent>,
    pub warnings: Vec<String>,
}

impl From<AssessmentOutcome> for AssessmentResponse {
    fn from(outcome: AssessmentOutcome) -> Self {
        Self {
            report: outcome.report,
            component_scores: outcome.scores,
            breakdown: outcome.breakdown,
            warnings: outcome.warnings,
        }
    }
}

fn run(engine: &RiskEngine, intake: ClinicalIntake) -> Result<AssessmentOutcome, AppError> {
    let profile = PatientProfile::try_from(intake)?;
    Ok(engine.assess(&profile, Local::now().naive_local())?)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<RiskEngine>>,
    Json(intake): Json<ClinicalIntake>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let outcome = run(&engine, intake)?;
    Ok(Json(AssessmentResponse::from(outcome)))
}

pub(crate) async fn assess_text_handler(
    State(engine): State<Arc<RiskEngine>>,
    Json(intake): Json<ClinicalIntake>,
) -> Result<Response, AppError> {
    let outcome = run(&engine, intake)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        outcome.report.to_text(),
    )
        .into_response())
}

pub(crate) async fn recommendations_handler(Path(category): Path<String>) -> Response {
    match category.parse::<RiskCategory>() {
        Ok(category) => {
            let payload = json!({
                "category": category.label(),
                "recommendations": recommend(category),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
