use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::contact::FieldError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("email credentials are missing on the server")]
    MissingEmailCredentials,

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("contact submission failed: {0}")]
    Submission(anyhow::Error),

    #[error("contact listing failed: {0}")]
    Listing(anyhow::Error),

    #[error("{1}")]
    Rejection(StatusCode, String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejection(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingEmailCredentials => {
                tracing::error!("Contact submission rejected: email credentials are not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Email credentials are missing on the server.",
                    })),
                )
                    .into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Validation error",
                    "errors": errors,
                })),
            )
                .into_response(),
            AppError::Submission(e) => {
                tracing::error!(error = ?e, "Contact submission error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to send message. Please try again later.",
                        "error": e.to_string(),
                    })),
                )
                    .into_response()
            }
            AppError::Listing(e) => {
                tracing::error!(error = ?e, "Failed to retrieve contact submissions");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to retrieve contacts",
                        "error": e.to_string(),
                    })),
                )
                    .into_response()
            }
            AppError::Rejection(status, message) => (
                status,
                Json(json!({
                    "success": false,
                    "message": message,
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_maps_to_500() {
        let response = AppError::MissingEmailCredentials.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation(vec![FieldError {
            field: "name".to_string(),
            message: "Name must be at least 2 characters long".to_string(),
        }])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rejection_keeps_its_status() {
        let response =
            AppError::Rejection(StatusCode::PAYLOAD_TOO_LARGE, "too large".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
