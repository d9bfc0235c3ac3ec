//! Page metadata for the public pages.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use sava_core::globals::{parse_document, GlobalSlug};
use sava_core::metadata::{self, Page};
use sava_core::seo::SeoSettings;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /metadata/{page}
///
/// Resolves title, description, keywords and Open Graph data for `home`,
/// `posts` or `search`. A missing or unreadable SEO global never fails the
/// request: the built-in copy is served instead.
pub async fn get_page_metadata(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page: Page = page.parse()?;
    let seo = load_seo(&state).await;

    let data = metadata::resolve(page, seo.as_ref(), &state.config.site_url);
    Ok(Json(DataResponse { data }))
}

async fn load_seo(state: &AppState) -> Option<SeoSettings> {
    match state.store.find_global(GlobalSlug::Seo.as_str()).await {
        Ok(Some(doc)) => match parse_document::<SeoSettings>(doc.data) {
            Ok(seo) => Some(seo),
            Err(e) => {
                tracing::warn!(error = %e, "Stored SEO global is unreadable, using fallback");
                None
            }
        },
        Ok(None) => Some(SeoSettings::default()),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching SEO data");
            None
        }
    }
}
