//! Repository for the `globals` table.

use sava_core::types::DbId;
use sqlx::PgPool;

use crate::models::global::GlobalDocument;

const COLUMNS: &str = "slug, data, updated_by, created_at, updated_at";

/// Reads and writes singleton CMS documents.
pub struct GlobalRepo;

impl GlobalRepo {
    /// Fetch the stored document for `slug`, if it has ever been saved.
    pub async fn find(pool: &PgPool, slug: &str) -> Result<Option<GlobalDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM globals WHERE slug = $1");
        sqlx::query_as::<_, GlobalDocument>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the document for `slug`.
    pub async fn upsert(
        pool: &PgPool,
        slug: &str,
        data: &serde_json::Value,
        updated_by: Option<DbId>,
    ) -> Result<GlobalDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO globals (slug, data, updated_by) VALUES ($1, $2, $3) \
             ON CONFLICT (slug) DO UPDATE \
                SET data = EXCLUDED.data, updated_by = EXCLUDED.updated_by \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlobalDocument>(&query)
            .bind(slug)
            .bind(data)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }
}
