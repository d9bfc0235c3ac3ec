//! Repository for the `contact_form_submissions` table.

use sava_core::contact::STATUS_NEW;
use sava_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_submission::{ContactSubmission, CreateContactSubmission};

/// Column list for `contact_form_submissions` queries.
const COLUMNS: &str = "\
    id, name, email, phone, service, message, status, created_at, updated_at";

/// Provides CRUD operations for contact-form submissions.
pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Insert a submission with status `new`, returning the full row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_form_submissions \
                (name, email, phone, service, message, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.service)
            .bind(&input.message)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_form_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions with optional status and service filters.
    ///
    /// Results are ordered newest-first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        service: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if service.is_some() {
            conditions.push(format!("service = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM contact_form_submissions {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, ContactSubmission>(&query);

        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(s) = service {
            q = q.bind(s);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Update the status of a submission. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_form_submissions SET status = $1 WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_form_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
