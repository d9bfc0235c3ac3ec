use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes, mounted at `/auth`.
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
