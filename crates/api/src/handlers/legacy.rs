//! Handlers for the single-event form endpoints (`/submit`, `/admin-login`,
//! `/submissions`).
//!
//! These serve plain HTML pages: success is a `302` redirect to a static page
//! and failures are `text/plain`. Submissions made here carry no event and are
//! held to [`DEFAULT_MIN_WORDS`].

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contest_core::event::DEFAULT_MIN_WORDS;
use contest_core::submission::SubmissionForm;
use contest_db::models::submission::{CreateSubmission, Submission};
use contest_db::SubmissionScope;

use crate::auth::{body_or_blank, AdminAuth};
use crate::error::{AppError, AppResult, PlainTextError};
use crate::extract::JsonOrForm;
use crate::handlers::admin::LoginRequest;
use crate::state::AppState;

/// Page shown after a successful submission.
pub const SUCCESS_PAGE: &str = "/success.html";

/// Page shown after a successful admin login.
pub const ADMIN_PAGE: &str = "/admin.html";

fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// POST /submit
pub async fn submit(
    State(state): State<AppState>,
    body: Result<JsonOrForm<SubmissionForm>, AppError>,
) -> Result<Response, PlainTextError> {
    let JsonOrForm(form) = body?;
    let accepted = form.require_fields()?.accept(DEFAULT_MIN_WORDS)?;

    let submission = state
        .store
        .create_submission(&CreateSubmission::new(None, accepted))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Insert error");
            PlainTextError::new(StatusCode::INTERNAL_SERVER_ERROR, "Error saving submission.")
        })?;

    tracing::info!(
        submission_id = submission.id,
        word_count = submission.word_count,
        "Submission accepted"
    );
    Ok(found(SUCCESS_PAGE))
}

/// POST /admin-login
pub async fn admin_login(
    State(state): State<AppState>,
    body: Result<JsonOrForm<LoginRequest>, AppError>,
) -> Result<Response, PlainTextError> {
    let input = body_or_blank(body);
    if state
        .config
        .admin
        .verify(&input.email, &input.password)
        .is_err()
    {
        tracing::warn!("Rejected admin login");
        return Err(PlainTextError::new(
            StatusCode::UNAUTHORIZED,
            "Invalid admin credentials",
        ));
    }
    Ok(found(ADMIN_PAGE))
}

/// GET /submissions
pub async fn list_submissions(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Submission>>> {
    let submissions = state
        .store
        .list_submissions(SubmissionScope::Unassigned)
        .await?;
    Ok(Json(submissions))
}
