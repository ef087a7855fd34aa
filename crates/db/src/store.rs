//! Storage capability shared by every backend.
//!
//! Handlers hold an `Arc<dyn ContestStore>` and never see which backend is
//! behind it. [`PgStore`] delegates to the Postgres repositories;
//! [`crate::memory::MemoryStore`] keeps everything in process.

use async_trait::async_trait;
use contest_core::event::normalize_slug;
use contest_core::types::DbId;

use crate::models::event::{CreateEvent, Event};
use crate::models::submission::{CreateSubmission, Submission};
use crate::repositories::{EventRepo, SubmissionRepo};
use crate::DbPool;

/// Postgres SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres SQLSTATE for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another event already uses this (normalized) slug.
    #[error("Duplicate event slug: {0}")]
    DuplicateSlug(String),

    /// A submission referenced an event id that does not exist.
    #[error("Unknown event id: {0}")]
    UnknownEvent(DbId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Which submissions to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionScope {
    /// Submissions made to the given event.
    Event(DbId),
    /// Submissions made through the single-event form.
    Unassigned,
}

#[async_trait]
pub trait ContestStore: Send + Sync {
    /// Look up an event by slug. Matching ignores case and surrounding
    /// whitespace.
    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>, StoreError>;

    /// All events, most recently created first.
    async fn list_events(&self) -> Result<Vec<Event>, StoreError>;

    /// Insert a new `active` event. Fails with [`StoreError::DuplicateSlug`]
    /// if the slug is taken, ignoring case.
    async fn create_event(&self, input: &CreateEvent) -> Result<Event, StoreError>;

    /// Set an event's status to closed. `None` if the slug is unknown.
    async fn close_event(&self, slug: &str) -> Result<Option<Event>, StoreError>;

    async fn create_submission(&self, input: &CreateSubmission)
        -> Result<Submission, StoreError>;

    /// Submissions in `scope`, newest first.
    async fn list_submissions(&self, scope: SubmissionScope)
        -> Result<Vec<Submission>, StoreError>;

    /// Cheap liveness probe of the backing store.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`ContestStore`] backed by a Postgres pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContestStore for PgStore {
    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>, StoreError> {
        Ok(EventRepo::find_by_slug(&self.pool, &normalize_slug(slug)).await?)
    }

    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        Ok(EventRepo::list(&self.pool).await?)
    }

    async fn create_event(&self, input: &CreateEvent) -> Result<Event, StoreError> {
        EventRepo::create(&self.pool, input).await.map_err(|err| {
            if is_violation(&err, UNIQUE_VIOLATION, "uq_events_slug") {
                tracing::debug!(slug = %input.slug, "Slug index rejected event insert");
                StoreError::DuplicateSlug(input.slug.clone())
            } else {
                StoreError::Database(err)
            }
        })
    }

    async fn close_event(&self, slug: &str) -> Result<Option<Event>, StoreError> {
        Ok(EventRepo::close(&self.pool, &normalize_slug(slug)).await?)
    }

    async fn create_submission(
        &self,
        input: &CreateSubmission,
    ) -> Result<Submission, StoreError> {
        SubmissionRepo::create(&self.pool, input)
            .await
            .map_err(|err| match input.event_id {
                Some(event_id) if is_violation(&err, FOREIGN_KEY_VIOLATION, "") => {
                    StoreError::UnknownEvent(event_id)
                }
                _ => StoreError::Database(err),
            })
    }

    async fn list_submissions(
        &self,
        scope: SubmissionScope,
    ) -> Result<Vec<Submission>, StoreError> {
        let rows = match scope {
            SubmissionScope::Event(event_id) => {
                SubmissionRepo::list_by_event(&self.pool, event_id).await?
            }
            SubmissionScope::Unassigned => SubmissionRepo::list_without_event(&self.pool).await?,
        };
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

/// Whether `err` is a database error with SQLSTATE `code` on a constraint
/// whose name starts with `constraint_prefix`.
fn is_violation(err: &sqlx::Error, code: &str, constraint_prefix: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(code)
                && db_err
                    .constraint()
                    .is_none_or(|name| name.starts_with(constraint_prefix))
        }
        _ => false,
    }
}
