//! Route definitions for the public `/events` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                 -> list
/// GET    /{slug}           -> get_by_slug
/// POST   /{slug}/submit    -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list))
        .route("/{slug}", get(events::get_by_slug))
        .route("/{slug}/submit", post(events::submit))
}
