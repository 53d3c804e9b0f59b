use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    Json,
};
use serde_json::Value;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::PrescriptionBody;

/// GET /prescriptions/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PrescriptionBody> {
    let prescription = state.prescriptions.show(&id).await?;
    Ok(ApiResponse::success(PrescriptionBody { prescription }))
}

/// PATCH /prescriptions/:id - owner-only partial update, 204 on success
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    state.prescriptions.update(user.id, &id, body).await?;
    Ok(ApiResponse::no_content())
}

/// DELETE /prescriptions/:id - owner-only, 204 on success
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.prescriptions.delete(user.id, &id).await?;
    Ok(ApiResponse::no_content())
}
