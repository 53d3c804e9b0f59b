use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service identification (public)
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Prescription API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health (public)",
            "prescriptions": "/prescriptions[/:id] (bearer token)",
            "mine": "/prescriptions/mine (bearer token)",
        }
    }))
}

/// GET /health - liveness plus a store ping (public)
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let backend = state.prescriptions.backend();

    match state.prescriptions.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok",
                "backend": backend,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "store": "unavailable",
                    "backend": backend,
                    "error": "store unavailable",
                })),
            )
        }
    }
}
