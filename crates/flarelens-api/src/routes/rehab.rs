use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};

use flarelens_service::RehabResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Rehab feedback for the patient's latest session. An image body is
/// optional; when present it is screened by the vision collaborator.
pub async fn rehab_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<RehabResponse>, ApiError> {
    let screening = if body.is_empty() {
        None
    } else {
        Some((state.generator.as_ref(), body.as_ref()))
    };
    let response = state.service.rehab_feedback(&id, screening).await?;
    Ok(Json(response))
}
