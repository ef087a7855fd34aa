pub mod admin;
pub mod events;
pub mod health;
pub mod legacy;
pub mod words;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                                  list (public)
/// /events/{slug}                           detail (public)
/// /events/{slug}/submit                    submit (public)
///
/// /admin/login                             credential check
/// /admin/events                            list (headers), create (body)
/// /admin/events/{slug}/close               close (body)
/// /admin/events/{slug}/submissions         list (headers)
///
/// /words/count                             word count preview
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/admin", admin::router())
        .nest("/words", words::router())
}
