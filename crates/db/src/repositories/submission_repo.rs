//! Repository for the `submissions` table.

use contest_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, name, email, phone, blog, word_count, submitted_at";

/// Provides insert and listing for submissions. Rows are never updated.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (event_id, name, email, phone, blog, word_count)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.blog)
            .bind(input.word_count)
            .fetch_one(pool)
            .await
    }

    /// List submissions for one event, newest first.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE event_id = $1
             ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List submissions made without an event, newest first.
    pub async fn list_without_event(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE event_id IS NULL
             ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }
}
