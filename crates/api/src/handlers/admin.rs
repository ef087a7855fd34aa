//! Handlers for the `/admin` resource (login, event management, submissions).

use std::fmt;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contest_core::error::CoreError;
use contest_core::event::{
    normalize_slug, resolve_min_words, validate_slug, validate_title, DEFAULT_IMAGE_URL,
    DEFAULT_REWARD,
};
use contest_core::types::Timestamp;
use contest_db::models::event::CreateEvent;
use contest_db::models::submission::Submission;
use contest_db::SubmissionScope;
use serde::{Deserialize, Serialize};

use crate::auth::{body_or_blank, verify_admin, AdminAuth, AdminBodyCredentials, REDACTED};
use crate::error::{AppError, AppResult};
use crate::extract::JsonOrForm;
use crate::handlers::events::{find_event, EventView};
use crate::response::SuccessResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
#[derive(Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /admin/events`. Every field is read from the body.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    pub admin_email: String,
    #[serde(default)]
    pub admin_password: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
    /// Defaults to the creation time.
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub min_words: Option<i32>,
    pub reward: Option<String>,
    pub image_url: Option<String>,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for CreateEventRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateEventRequest")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &REDACTED)
            .field("title", &self.title)
            .field("slug", &self.slug)
            .field("start_date", &self.start_date)
            .field("end_date", &self.end_date)
            .field("min_words", &self.min_words)
            .finish_non_exhaustive()
    }
}

/// Submissions of one event, newest first.
#[derive(Debug, Serialize)]
pub struct EventSubmissions {
    pub event: EventView,
    pub submissions: Vec<Submission>,
}

/// Trim `value`, treating blank as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateEventRequest {
    /// Validate the event fields and fill in defaults.
    fn into_create_event(self, now: Timestamp) -> Result<CreateEvent, CoreError> {
        let title = validate_title(&self.title)?;
        let slug = validate_slug(&self.slug)?;
        let end_date = self
            .end_date
            .ok_or_else(|| CoreError::Validation("endDate is required".into()))?;
        let min_words = resolve_min_words(self.min_words)?;

        Ok(CreateEvent {
            title,
            slug,
            description: non_blank(self.description),
            start_date: self.start_date.unwrap_or(now),
            end_date,
            min_words,
            reward: non_blank(self.reward).unwrap_or_else(|| DEFAULT_REWARD.to_string()),
            image_url: non_blank(self.image_url)
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/login
///
/// Checks the credentials and reports success. No session is created.
pub async fn login(
    State(state): State<AppState>,
    body: Result<JsonOrForm<LoginRequest>, AppError>,
) -> AppResult<Json<SuccessResponse>> {
    let input = body_or_blank(body);
    verify_admin(&state, &input.email, &input.password)?;
    tracing::info!("Admin login succeeded");
    Ok(Json(SuccessResponse::new("Login successful")))
}

/// POST /api/admin/events
pub async fn create_event(
    State(state): State<AppState>,
    body: Result<JsonOrForm<CreateEventRequest>, AppError>,
) -> AppResult<(StatusCode, Json<EventView>)> {
    let input = body_or_blank(body);
    verify_admin(&state, &input.admin_email, &input.admin_password)?;

    let now = Utc::now();
    let new_event = input.into_create_event(now)?;

    // The store's unique index still catches a concurrent insert of the same
    // slug; this lookup gives the common case a clean error.
    if state.store.find_event_by_slug(&new_event.slug).await?.is_some() {
        return Err(AppError::Core(CoreError::DuplicateSlug {
            slug: new_event.slug,
        }));
    }

    let event = state.store.create_event(&new_event).await?;
    tracing::info!(event_id = event.id, slug = %event.slug, "Event created");

    Ok((StatusCode::CREATED, Json(EventView::at(event, now))))
}

/// GET /api/admin/events
pub async fn list_events(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EventView>>> {
    let now = Utc::now();
    let events = state.store.list_events().await?;
    Ok(Json(
        events.into_iter().map(|e| EventView::at(e, now)).collect(),
    ))
}

/// POST /api/admin/events/{slug}/close
///
/// Closing an already-closed event succeeds and changes nothing.
pub async fn close_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Result<JsonOrForm<AdminBodyCredentials>, AppError>,
) -> AppResult<Json<EventView>> {
    let credentials = body_or_blank(body);
    verify_admin(&state, &credentials.admin_email, &credentials.admin_password)?;

    let event = state
        .store
        .close_event(&slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::EventNotFound {
                slug: normalize_slug(&slug),
            })
        })?;
    tracing::info!(event_id = event.id, slug = %event.slug, "Event closed");

    Ok(Json(EventView::at(event, Utc::now())))
}

/// GET /api/admin/events/{slug}/submissions
pub async fn list_submissions(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<EventSubmissions>> {
    let event = find_event(&state, &slug).await?;
    let submissions = state
        .store
        .list_submissions(SubmissionScope::Event(event.id))
        .await?;

    Ok(Json(EventSubmissions {
        event: EventView::at(event, Utc::now()),
        submissions,
    }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Duration;

    use super::*;

    fn request() -> CreateEventRequest {
        CreateEventRequest {
            admin_email: String::new(),
            admin_password: String::new(),
            title: "  Spring Essay ".into(),
            slug: " Spring-Essay ".into(),
            description: Some("   ".into()),
            start_date: None,
            end_date: Some(Utc::now() + Duration::days(3)),
            min_words: None,
            reward: None,
            image_url: Some("".into()),
        }
    }

    #[test]
    fn applies_defaults_and_normalization() {
        let now = Utc::now();
        let event = request().into_create_event(now).unwrap();
        assert_eq!(event.title, "Spring Essay");
        assert_eq!(event.slug, "spring-essay");
        assert_eq!(event.description, None);
        assert_eq!(event.start_date, now);
        assert_eq!(event.min_words, 250);
        assert_eq!(event.reward, "₹0");
        assert_eq!(event.image_url, "🎯");
    }

    #[test]
    fn end_date_is_required() {
        let mut req = request();
        req.end_date = None;
        assert_matches!(req.into_create_event(Utc::now()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_positive_min_words() {
        let mut req = request();
        req.min_words = Some(0);
        assert_matches!(req.into_create_event(Utc::now()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let mut req = request();
        req.admin_password = "hunter2-secret".into();
        assert!(!format!("{req:?}").contains("hunter2-secret"));

        let login = LoginRequest {
            email: "admin@example.com".into(),
            password: "hunter2-secret".into(),
        };
        let rendered = format!("{login:?}");
        assert!(rendered.contains("admin@example.com"));
        assert!(!rendered.contains("hunter2-secret"));
    }

    #[test]
    fn reads_credentials_and_fields_from_one_body() {
        let req: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "adminEmail": "admin@example.com",
            "adminPassword": "secret",
            "title": "T",
            "slug": "t",
            "endDate": "2030-01-01T00:00:00Z",
            "minWords": 300,
            "reward": "₹500"
        }))
        .unwrap();
        assert_eq!(req.admin_email, "admin@example.com");
        assert_eq!(req.admin_password, "secret");
        let event = req.into_create_event(Utc::now()).unwrap();
        assert_eq!(event.min_words, 300);
        assert_eq!(event.reward, "₹500");
    }
}
