use axum::{
    Json, Router, extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse,
    routing::get,
};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::email::EmailService;

mod contact;
mod health;

/// Request bodies are capped at 10 KB, matching the public form payloads
/// this service accepts.
const MAX_BODY_BYTES: usize = 10 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub email: EmailService,
    pub environment: String,
}

pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
        })),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/api/health", get(health::health))
        .route(
            "/api/contact",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
