use axum::routing::get;
use axum::Router;

use crate::handlers::words;
use crate::state::AppState;

/// Routes mounted at `/words`.
pub fn router() -> Router<AppState> {
    Router::new().route("/count", get(words::count))
}
