//! Public contact form route, mounted at the root (not under `/api/v1`)
//! because the site's form posts to `/api/contact`.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(contact::submit_contact_form))
}
