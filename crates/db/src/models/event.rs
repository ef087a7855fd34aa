//! Event entity model and DTOs.

use contest_core::error::CoreError;
use contest_core::event::{self, EventStatus};
use contest_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub title: String,
    /// Always stored normalized (trimmed, lowercase).
    pub slug: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub min_words: i32,
    #[sqlx(try_from = "String")]
    pub status: EventStatus,
    pub reward: String,
    pub image_url: String,
    pub created_at: Timestamp,
}

impl Event {
    /// See [`contest_core::event::is_active`].
    pub fn is_active(&self, now: Timestamp) -> bool {
        event::is_active(self.status, self.end_date, now)
    }

    /// See [`contest_core::event::days_remaining`].
    pub fn days_remaining(&self, now: Timestamp) -> i64 {
        event::days_remaining(self.end_date, now)
    }

    pub fn ensure_accepting_submissions(&self, now: Timestamp) -> Result<(), CoreError> {
        event::ensure_accepting_submissions(&self.slug, self.status, self.end_date, now)
    }
}

/// DTO for creating a new event.
///
/// Values are expected to be validated and defaulted already (see
/// [`contest_core::event`]); the store only enforces slug uniqueness.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub min_words: i32,
    pub reward: String,
    pub image_url: String,
}
