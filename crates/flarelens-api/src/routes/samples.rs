use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use flarelens_core::models::assessment::RiskAssessment;
use flarelens_core::models::sample::MetricSample;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn ingest_sample(
    State(state): State<AppState>,
    Json(sample): Json<MetricSample>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let assessment = state.service.ingest(sample)?;
    Ok(Json(assessment))
}

#[derive(Deserialize)]
pub struct WindowParams {
    n: Option<usize>,
}

pub async fn get_window(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<WindowParams>,
) -> Json<Vec<MetricSample>> {
    let n = params.n.unwrap_or(flarelens_coach::context::DEFAULT_WINDOW_SIZE);
    Json(state.service.window(&id, n))
}
