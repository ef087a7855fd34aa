//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /login                          -> login
/// GET    /events                         -> list_events
/// POST   /events                         -> create_event
/// POST   /events/{slug}/close            -> close_event
/// GET    /events/{slug}/submissions      -> list_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route(
            "/events",
            get(admin::list_events).post(admin::create_event),
        )
        .route("/events/{slug}/close", post(admin::close_event))
        .route("/events/{slug}/submissions", get(admin::list_submissions))
}
