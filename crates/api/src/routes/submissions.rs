//! Mounted at `/contact-form-submissions` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// ```text
/// GET    /              -> list_submissions
/// GET    /options       -> get_options
/// GET    /{id}          -> get_submission
/// PATCH  /{id}          -> update_submission_status
/// DELETE /{id}          -> delete_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(submissions::list_submissions))
        .route("/options", get(submissions::get_options))
        .route(
            "/{id}",
            get(submissions::get_submission)
                .patch(submissions::update_submission_status)
                .delete(submissions::delete_submission),
        )
}
