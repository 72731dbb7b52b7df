use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::contact::ContactForm;
use crate::error::AppError;
use crate::queries;
use crate::routes::AppState;

/// POST /api/contact - Submit the contact form
///
/// Workflow: check the notification precondition, validate, persist, send the
/// operator notification, send the submitter confirmation, echo the stored
/// record. A failed email send after a successful insert leaves the record in
/// place; the response is still a 500.
#[tracing::instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(form) = payload?;

    // Fail fast before touching storage when the notification emails could
    // never be sent.
    if !state.email.is_configured() {
        return Err(AppError::MissingEmailCredentials);
    }

    let contact = form.into_validated().map_err(AppError::Validation)?;

    let submission = queries::contact::insert_contact(&state.pool, &contact)
        .await
        .map_err(AppError::Submission)?;

    tracing::info!(
        id = submission.id,
        email = %submission.email,
        "Contact submission stored"
    );

    state
        .email
        .send_contact_notification(&submission)
        .await
        .map_err(AppError::Submission)?;

    state
        .email
        .send_confirmation(&submission)
        .await
        .map_err(AppError::Submission)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Message sent successfully! We'll get back to you soon.",
            "data": submission,
        })),
    ))
}

/// GET /api/contact - List every stored submission, newest first
#[tracing::instrument(skip(state))]
pub async fn list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let submissions = queries::contact::list_contacts(&state.pool)
        .await
        .map_err(AppError::Listing)?;

    Ok(Json(json!({
        "success": true,
        "count": submissions.len(),
        "data": submissions,
    })))
}
