use axum::Json;
use axum::extract::{Path, State};

use flarelens_core::models::assessment::RiskAssessment;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_flare_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let assessment = state.service.latest_assessment(&id)?;
    Ok(Json(assessment))
}
