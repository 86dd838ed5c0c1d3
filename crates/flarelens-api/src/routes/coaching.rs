use axum::Json;
use axum::extract::{Path, State};

use flarelens_service::CoachingResponse;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn coach_stress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CoachingResponse>, ApiError> {
    let time_of_day = jiff::Zoned::now().strftime("%H:%M").to_string();
    let response = state
        .service
        .coach(&id, state.generator.as_ref(), &time_of_day)
        .await?;
    Ok(Json(response))
}
