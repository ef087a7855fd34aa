use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contest_core::error::CoreError;
use contest_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `contest_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage backend error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// HTTP status, machine-readable code and client-facing message.
    ///
    /// Internal and storage failures are logged here and replaced by a
    /// generic message.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MissingFields => {
                    (StatusCode::BAD_REQUEST, "MISSING_FIELDS", core.to_string())
                }
                CoreError::InsufficientWords { .. } => {
                    (StatusCode::BAD_REQUEST, "INSUFFICIENT_WORDS", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::DuplicateSlug { .. } => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_SLUG", core.to_string())
                }
                CoreError::Unauthorized => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", core.to_string())
                }
                CoreError::SubmissionsClosed { .. } => (
                    StatusCode::FORBIDDEN,
                    "SUBMISSIONS_CLOSED",
                    "Submissions for this event are closed".to_string(),
                ),
                CoreError::EventNotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    "EVENT_NOT_FOUND",
                    "Event not found".to_string(),
                ),
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let mut body = json!({
            "error": message,
            "code": code,
        });

        if let AppError::Core(CoreError::InsufficientWords { count, required }) = &self {
            body["wordCount"] = json!(count);
            body["minWords"] = json!(required);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Error rendered as a `text/plain` body, for the form-post endpoints whose
/// callers are plain HTML pages.
#[derive(Debug)]
pub struct PlainTextError {
    pub status: StatusCode,
    pub message: String,
}

impl PlainTextError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<AppError> for PlainTextError {
    fn from(err: AppError) -> Self {
        let (status, _, message) = err.classify();
        Self { status, message }
    }
}

impl From<CoreError> for PlainTextError {
    fn from(err: CoreError) -> Self {
        AppError::Core(err).into()
    }
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message,
        )
            .into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a storage error into an HTTP status, error code, and message.
///
/// - `DuplicateSlug` maps to 400 (the slug is part of the client's input).
/// - `UnknownEvent` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::DuplicateSlug(slug) => (
            StatusCode::BAD_REQUEST,
            "DUPLICATE_SLUG",
            CoreError::DuplicateSlug { slug: slug.clone() }.to_string(),
        ),
        StoreError::UnknownEvent(_) => (
            StatusCode::NOT_FOUND,
            "EVENT_NOT_FOUND",
            "Event not found".to_string(),
        ),
        StoreError::Database(db_err) => {
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
    }
}
