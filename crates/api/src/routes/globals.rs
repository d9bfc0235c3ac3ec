use axum::routing::get;
use axum::Router;

use crate::handlers::globals;
use crate::state::AppState;

/// Global document routes, mounted at `/globals`.
///
/// ```text
/// GET    /{slug}        -> get_global (public)
/// PUT    /{slug}        -> update_global (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{slug}",
        get(globals::get_global).put(globals::update_global),
    )
}
