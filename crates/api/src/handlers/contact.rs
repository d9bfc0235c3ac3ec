//! Public contact-form submission endpoint.
//!
//! Unauthenticated. The site's contact form posts here; the body shapes of
//! the responses are what the form expects, so this handler does not use
//! the `{ data }` / `{ error, code }` envelopes of the rest of the API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sava_core::contact::{ContactForm, ContactFormInput};
use sava_core::types::DbId;
use sava_db::models::contact_submission::CreateContactSubmission;
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Failure modes of a submission, each with a fixed message.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid request body")]
    InvalidBody,

    #[error("Failed to submit form")]
    Persistence(#[source] sqlx::Error),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = match &self {
            ContactError::MissingFields | ContactError::InvalidBody => StatusCode::BAD_REQUEST,
            ContactError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: DbId,
}

/// POST /api/contact
///
/// Stores the submission with status `new`. A client-sent `status` is
/// dropped during deserialization.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    body: Result<Json<ContactFormInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), ContactError> {
    let Json(input) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected contact form body");
        ContactError::InvalidBody
    })?;

    let form = ContactForm::try_from(input).map_err(|_| ContactError::MissingFields)?;

    let submission = state
        .store
        .create_submission(&CreateContactSubmission::from(form))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error submitting contact form");
            ContactError::Persistence(e)
        })?;

    tracing::info!(
        submission_id = submission.id,
        service = submission.service.as_deref().unwrap_or("-"),
        "Contact form submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Form submitted successfully",
            id: submission.id,
        }),
    ))
}
