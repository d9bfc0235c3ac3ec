//! Global document row model.

use sava_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `globals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GlobalDocument {
    pub slug: String,
    pub data: serde_json::Value,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
