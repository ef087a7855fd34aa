//! In-process [`ContestStore`] backend.
//!
//! Holds events and submissions in memory behind a single `RwLock`. Every
//! operation takes the lock once, so each insert or close is atomic with
//! respect to the others. Used for local runs without Postgres and by the
//! HTTP integration tests.

use async_trait::async_trait;
use chrono::Utc;
use contest_core::event::{normalize_slug, EventStatus};
use contest_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::event::{CreateEvent, Event};
use crate::models::submission::{CreateSubmission, Submission};
use crate::store::{ContestStore, StoreError, SubmissionScope};

#[derive(Default)]
struct State {
    events: Vec<Event>,
    submissions: Vec<Submission>,
    last_event_id: DbId,
    last_submission_id: DbId,
}

/// [`ContestStore`] that keeps all records in memory. Data is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T, K: Ord>(items: &mut [T], key: impl Fn(&T) -> K) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[async_trait]
impl ContestStore for MemoryStore {
    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>, StoreError> {
        let slug = normalize_slug(slug);
        let state = self.state.read().await;
        Ok(state.events.iter().find(|e| e.slug == slug).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let mut events = self.state.read().await.events.clone();
        newest_first(&mut events, |e| (e.created_at, e.id));
        Ok(events)
    }

    async fn create_event(&self, input: &CreateEvent) -> Result<Event, StoreError> {
        let slug = normalize_slug(&input.slug);
        let mut state = self.state.write().await;
        if state.events.iter().any(|e| e.slug == slug) {
            return Err(StoreError::DuplicateSlug(slug));
        }

        state.last_event_id += 1;
        let event = Event {
            id: state.last_event_id,
            title: input.title.clone(),
            slug,
            description: input.description.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            min_words: input.min_words,
            status: EventStatus::Active,
            reward: input.reward.clone(),
            image_url: input.image_url.clone(),
            created_at: Utc::now(),
        };
        state.events.push(event.clone());
        Ok(event)
    }

    async fn close_event(&self, slug: &str) -> Result<Option<Event>, StoreError> {
        let slug = normalize_slug(slug);
        let mut state = self.state.write().await;
        Ok(state
            .events
            .iter_mut()
            .find(|e| e.slug == slug)
            .map(|event| {
                event.status = EventStatus::Closed;
                event.clone()
            }))
    }

    async fn create_submission(
        &self,
        input: &CreateSubmission,
    ) -> Result<Submission, StoreError> {
        let mut state = self.state.write().await;
        if let Some(event_id) = input.event_id {
            if !state.events.iter().any(|e| e.id == event_id) {
                return Err(StoreError::UnknownEvent(event_id));
            }
        }

        state.last_submission_id += 1;
        let submission = Submission {
            id: state.last_submission_id,
            event_id: input.event_id,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            blog: input.blog.clone(),
            word_count: input.word_count,
            submitted_at: Utc::now(),
        };
        state.submissions.push(submission.clone());
        Ok(submission)
    }

    async fn list_submissions(
        &self,
        scope: SubmissionScope,
    ) -> Result<Vec<Submission>, StoreError> {
        let wanted = match scope {
            SubmissionScope::Event(id) => Some(id),
            SubmissionScope::Unassigned => None,
        };
        let state = self.state.read().await;
        let mut rows: Vec<Submission> = state
            .submissions
            .iter()
            .filter(|s| s.event_id == wanted)
            .cloned()
            .collect();
        newest_first(&mut rows, |s| (s.submitted_at, s.id));
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
