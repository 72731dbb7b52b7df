use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use crate::routes::AppState;

/// GET /api/health - Liveness probe
///
/// Returns 200 OK if the process is alive
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339(),
            "environment": state.environment,
        })),
    )
}

/// GET / - Service metadata and endpoint listing
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Contact form backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "contact": "/api/contact",
        },
    }))
}
