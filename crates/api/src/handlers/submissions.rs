//! Back-office handlers for the `contact-form-submissions` collection.
//!
//! All endpoints require authentication.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use sava_core::contact::{self, FieldOption};
use sava_core::error::CoreError;
use sava_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use sava_core::types::DbId;
use sava_db::models::contact_submission::{SubmissionListParams, UpdateSubmissionStatus};
use sava_db::SubmissionFilter;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "ContactSubmission";

// ---------------------------------------------------------------------------
// GET /contact-form-submissions
// ---------------------------------------------------------------------------

/// List submissions, newest first, with optional status and service filters.
pub async fn list_submissions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SubmissionListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        contact::validate_status(s)?;
    }
    if let Some(ref s) = params.service {
        contact::validate_service(s)?;
    }

    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let filter = SubmissionFilter {
        status: params.status,
        service: params.service,
    };

    let submissions = state.store.list_submissions(&filter, limit, offset).await?;

    Ok(Json(DataResponse { data: submissions }))
}

// ---------------------------------------------------------------------------
// GET /contact-form-submissions/{id}
// ---------------------------------------------------------------------------

pub async fn get_submission(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = state
        .store
        .find_submission(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse { data: submission }))
}

// ---------------------------------------------------------------------------
// PATCH /contact-form-submissions/{id}
// ---------------------------------------------------------------------------

/// Move a submission through `new` -> `in-progress` -> `completed`.
/// Any known status may be set; there is no enforced order.
pub async fn update_submission_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubmissionStatus>,
) -> AppResult<impl IntoResponse> {
    contact::validate_status(&input.status)?;

    let submission = state
        .store
        .update_submission_status(id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(
        submission_id = id,
        status = %input.status,
        user_id = auth.user_id,
        role = %auth.role,
        "Submission status updated",
    );

    Ok(Json(DataResponse { data: submission }))
}

// ---------------------------------------------------------------------------
// DELETE /contact-form-submissions/{id}
// ---------------------------------------------------------------------------

pub async fn delete_submission(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !state.store.delete_submission(id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(
        submission_id = id,
        user_id = auth.user_id,
        role = %auth.role,
        "Submission deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /contact-form-submissions/options
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SubmissionOptions {
    pub services: Vec<FieldOption>,
    pub statuses: Vec<FieldOption>,
}

/// Select options for the service and status fields, with display labels.
pub async fn get_options(_auth: AuthUser) -> Json<DataResponse<SubmissionOptions>> {
    Json(DataResponse {
        data: SubmissionOptions {
            services: contact::service_options(),
            statuses: contact::status_options(),
        },
    })
}
