//! Root-level routes of the single-event form.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::legacy;
use crate::state::AppState;

/// Mount the single-event form routes (root level, NOT under `/api`).
///
/// ```text
/// POST   /submit          -> submit
/// POST   /admin-login     -> admin_login
/// GET    /submissions     -> list_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(legacy::submit))
        .route("/admin-login", post(legacy::admin_login))
        .route("/submissions", get(legacy::list_submissions))
}
