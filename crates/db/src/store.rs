//! Store traits consumed by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn Store>` instead of a raw pool so the API can be
//! exercised against in-memory stores, including ones that fail on demand.
//! [`PgStore`] is the production implementation and delegates to the
//! repositories.

use async_trait::async_trait;
use sava_core::types::DbId;

use crate::models::contact_submission::{ContactSubmission, CreateContactSubmission};
use crate::models::global::GlobalDocument;
use crate::models::user::{CreateUser, User};
use crate::repositories::{ContactSubmissionRepo, GlobalRepo, UserRepo};
use crate::DbPool;

/// Filters accepted by [`SubmissionStore::list_submissions`].
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    pub status: Option<String>,
    pub service: Option<String>,
}

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn create_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error>;

    async fn find_submission(&self, id: DbId) -> Result<Option<ContactSubmission>, sqlx::Error>;

    /// Newest first.
    async fn list_submissions(
        &self,
        filter: &SubmissionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error>;

    async fn update_submission_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error>;

    /// Returns `false` when no row had this id.
    async fn delete_submission(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

#[async_trait]
pub trait GlobalStore: Send + Sync {
    async fn find_global(&self, slug: &str) -> Result<Option<GlobalDocument>, sqlx::Error>;

    async fn upsert_global(
        &self,
        slug: &str,
        data: &serde_json::Value,
        updated_by: Option<DbId>,
    ) -> Result<GlobalDocument, sqlx::Error>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;

    async fn create_user(&self, input: &CreateUser) -> Result<User, sqlx::Error>;

    async fn count_users(&self) -> Result<i64, sqlx::Error>;
}

/// Everything the API needs from persistence.
#[async_trait]
pub trait Store: SubmissionStore + GlobalStore + UserStore {
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`Store`] backed by the PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn create_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        ContactSubmissionRepo::create(&self.pool, input).await
    }

    async fn find_submission(&self, id: DbId) -> Result<Option<ContactSubmission>, sqlx::Error> {
        ContactSubmissionRepo::find_by_id(&self.pool, id).await
    }

    async fn list_submissions(
        &self,
        filter: &SubmissionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        ContactSubmissionRepo::list_filtered(
            &self.pool,
            filter.status.as_deref(),
            filter.service.as_deref(),
            limit,
            offset,
        )
        .await
    }

    async fn update_submission_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        ContactSubmissionRepo::update_status(&self.pool, id, status).await
    }

    async fn delete_submission(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ContactSubmissionRepo::delete(&self.pool, id).await
    }
}

#[async_trait]
impl GlobalStore for PgStore {
    async fn find_global(&self, slug: &str) -> Result<Option<GlobalDocument>, sqlx::Error> {
        GlobalRepo::find(&self.pool, slug).await
    }

    async fn upsert_global(
        &self,
        slug: &str,
        data: &serde_json::Value,
        updated_by: Option<DbId>,
    ) -> Result<GlobalDocument, sqlx::Error> {
        GlobalRepo::upsert(&self.pool, slug, data, updated_by).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_email(&self.pool, email).await
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        UserRepo::create(&self.pool, input).await
    }

    async fn count_users(&self) -> Result<i64, sqlx::Error> {
        UserRepo::count(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
