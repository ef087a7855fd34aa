//! Repository for the `events` table.

use contest_core::event::EventStatus;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, start_date, end_date, min_words, \
                       status, reward, image_url, created_at";

/// Provides create/read/close operations for events. Events are never deleted.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new `active` event, returning the created row.
    ///
    /// A slug collision surfaces as a unique violation on `uq_events_slug`.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (title, slug, description, start_date, end_date, min_words, status, reward, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.min_words)
            .bind(EventStatus::Active.as_str())
            .bind(&input.reward)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an event by slug, ignoring case.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE LOWER(slug) = LOWER($1)");
        sqlx::query_as::<_, Event>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all events ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Mark an event closed. Closing an already-closed event is a no-op that
    /// still returns the row.
    ///
    /// Returns `None` if no event has the given slug.
    pub async fn close(pool: &PgPool, slug: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET status = $2
             WHERE LOWER(slug) = LOWER($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(slug)
            .bind(EventStatus::Closed.as_str())
            .fetch_optional(pool)
            .await
    }
}
