//! Handlers for the CMS global documents (`landing`, `seo`).
//!
//! Reads are public: the presentation layer fetches globals to render
//! pages. Writes require authentication, are validated against the slug's
//! schema, and trigger the slug's after-change hook.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use sava_core::globals::GlobalSlug;

use crate::error::AppResult;
use crate::hooks::{self, HookContext};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `PUT /globals/{slug}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGlobalParams {
    #[serde(default)]
    pub disable_revalidate: bool,
}

/// GET /globals/{slug}
///
/// Returns the stored document, or the schema defaults when the global has
/// never been saved.
pub async fn get_global(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let slug: GlobalSlug = slug.parse()?;

    let data = match state.store.find_global(slug.as_str()).await? {
        Some(doc) => doc.data,
        None => slug.default_document()?,
    };

    Ok(Json(DataResponse { data }))
}

/// PUT /globals/{slug}
pub async fn update_global(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<UpdateGlobalParams>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let slug: GlobalSlug = slug.parse()?;
    let data = slug.validate_document(body)?;

    let saved = state
        .store
        .upsert_global(slug.as_str(), &data, Some(auth.user_id))
        .await?;

    tracing::info!(
        global = %slug,
        user_id = auth.user_id,
        role = %auth.role,
        "Global updated"
    );

    let ctx = HookContext {
        disable_revalidate: params.disable_revalidate,
    };
    let report = hooks::after_change(slug, ctx, state.revalidator.as_ref()).await;
    if !report.failed.is_empty() {
        tracing::warn!(global = %slug, failed = ?report.failed, "Some revalidations failed");
    }

    Ok(Json(DataResponse { data: saved.data }))
}
