pub mod auth;
pub mod contact;
pub mod globals;
pub mod health;
pub mod metadata;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                                  login (public)
///
/// /contact-form-submissions                    list (auth)
/// /contact-form-submissions/options            service/status options (auth)
/// /contact-form-submissions/{id}               get, patch status, delete (auth)
///
/// /globals/{slug}                              get (public), put (auth)
///
/// /metadata/{page}                             resolved page metadata (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/contact-form-submissions", submissions::router())
        .nest("/globals", globals::router())
        .nest("/metadata", metadata::router())
}
