use axum::routing::get;
use axum::Router;

use crate::handlers::metadata;
use crate::state::AppState;

/// Page metadata routes, mounted at `/metadata`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{page}", get(metadata::get_page_metadata))
}
