use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};
use serde_json::Value;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::{PrescriptionBody, PrescriptionsBody};

/// POST /prescriptions - create a prescription owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<PrescriptionBody> {
    let Json(body) = payload?;
    let prescription = state.prescriptions.create(user.id, body).await?;
    Ok(ApiResponse::created(PrescriptionBody { prescription }))
}

/// GET /prescriptions - every prescription, regardless of owner
pub async fn list(State(state): State<AppState>) -> ApiResult<PrescriptionsBody> {
    let prescriptions = state.prescriptions.list_all().await?;
    Ok(ApiResponse::success(PrescriptionsBody { prescriptions }))
}

/// GET /prescriptions/mine - prescriptions owned by the caller
pub async fn mine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<PrescriptionsBody> {
    let prescriptions = state.prescriptions.list_mine(user.id).await?;
    Ok(ApiResponse::success(PrescriptionsBody { prescriptions }))
}
