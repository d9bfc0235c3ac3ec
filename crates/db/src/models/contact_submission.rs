//! Contact-form submission entity model and DTOs.

use sava_core::contact::ContactForm;
use sava_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_form_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a submission. There is no status field: new rows
/// always start as `new`.
#[derive(Debug, Clone)]
pub struct CreateContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl From<ContactForm> for CreateContactSubmission {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            service: form.service,
            message: form.message,
        }
    }
}

/// DTO for changing a submission's status from the back office.
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionStatus {
    pub status: String,
}

/// Query parameters for listing submissions.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionListParams {
    pub status: Option<String>,
    pub service: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
