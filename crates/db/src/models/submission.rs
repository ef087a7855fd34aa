//! Submission entity model and DTOs.

use contest_core::submission::AcceptedSubmission;
use contest_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A submission row from the `submissions` table. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: DbId,
    /// `None` for submissions made through the single-event form.
    pub event_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blog: String,
    pub word_count: i32,
    pub submitted_at: Timestamp,
}

/// DTO for inserting a submission that already passed validation.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub event_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blog: String,
    pub word_count: i32,
}

impl CreateSubmission {
    pub fn new(event_id: Option<DbId>, accepted: AcceptedSubmission) -> Self {
        Self {
            event_id,
            name: accepted.name,
            email: accepted.email,
            phone: accepted.phone,
            blog: accepted.blog,
            word_count: i32::try_from(accepted.word_count).unwrap_or(i32::MAX),
        }
    }
}
