use std::sync::Arc;

use contest_db::ContestStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Event and submission storage (Postgres or in-memory).
    pub store: Arc<dyn ContestStore>,
    /// Server configuration, including the admin credentials.
    pub config: Arc<ServerConfig>,
}
