use axum::Json;
use axum::extract::{Path, State};

use flarelens_service::SummaryResponse;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn clinician_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let response = state
        .service
        .clinician_summary(&id, state.generator.as_ref())
        .await?;
    Ok(Json(response))
}
