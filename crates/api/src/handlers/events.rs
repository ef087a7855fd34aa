//! Handlers for the public `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contest_core::error::CoreError;
use contest_core::event::normalize_slug;
use contest_core::submission::SubmissionForm;
use contest_core::types::Timestamp;
use contest_db::models::event::Event;
use contest_db::models::submission::{CreateSubmission, Submission};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrForm;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// An event plus its activity fields computed at request time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub is_active: bool,
    pub days_remaining: i64,
}

impl EventView {
    pub fn at(event: Event, now: Timestamp) -> Self {
        Self {
            is_active: event.is_active(now),
            days_remaining: event.days_remaining(now),
            event,
        }
    }
}

/// Returned after a submission is stored.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub submission: Submission,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Resolve `slug` to an event or fail with `EventNotFound`.
pub(crate) async fn find_event(state: &AppState, slug: &str) -> AppResult<Event> {
    state
        .store
        .find_event_by_slug(slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::EventNotFound {
                slug: normalize_slug(slug),
            })
        })
}

/// GET /api/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EventView>>> {
    let now = Utc::now();
    let events = state.store.list_events().await?;
    Ok(Json(
        events.into_iter().map(|e| EventView::at(e, now)).collect(),
    ))
}

/// GET /api/events/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<EventView>> {
    let event = find_event(&state, &slug).await?;
    Ok(Json(EventView::at(event, Utc::now())))
}

/// POST /api/events/{slug}/submit
///
/// Gates run in order and the first failure wins: required fields, event
/// lookup, event open, word count.
pub async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    JsonOrForm(form): JsonOrForm<SubmissionForm>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let fields = form.require_fields()?;

    let event = find_event(&state, &slug).await?;
    event.ensure_accepting_submissions(Utc::now())?;

    let accepted = fields.accept(event.min_words)?;
    let submission = state
        .store
        .create_submission(&CreateSubmission::new(Some(event.id), accepted))
        .await?;

    tracing::info!(
        event = %event.slug,
        submission_id = submission.id,
        word_count = submission.word_count,
        "Submission accepted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Submission received",
            submission,
        }),
    ))
}
