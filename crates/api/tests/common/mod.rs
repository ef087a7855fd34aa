//! Shared helpers for the HTTP integration tests.
//!
//! Tests drive the production router (same middleware stack as `main.rs`)
//! backed by an in-memory store, so no database is needed.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::{Duration, Utc};
use contest_api::config::{LogFormat, ServerConfig, StoreBackend};
use contest_api::router::build_app_router;
use contest_api::state::AppState;
use contest_core::admin::AdminCredentials;
use contest_db::models::event::{CreateEvent, Event};
use contest_db::{ContestStore, MemoryStore};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Correct-Horse-9";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin: AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD),
        store: StoreBackend::Memory,
        static_dir: None,
        log_format: LogFormat::Pretty,
    }
}

/// The router under test plus a handle on its store for seeding and
/// inspection.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state, &config),
        store,
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// An event that is open for another week.
pub fn open_event(slug: &str, min_words: i32) -> CreateEvent {
    let now = Utc::now();
    CreateEvent {
        title: format!("Contest {slug}"),
        slug: slug.to_string(),
        description: None,
        start_date: now - Duration::days(1),
        end_date: now + Duration::days(7),
        min_words,
        reward: "₹0".to_string(),
        image_url: "🎯".to_string(),
    }
}

pub async fn seed_event(app: &TestApp, input: CreateEvent) -> Event {
    app.store.create_event(&input).await.unwrap()
}

pub fn blog_of(words: usize) -> String {
    "word ".repeat(words)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with admin credentials in headers.
pub async fn get_as(app: &TestApp, uri: &str, email: &str, password: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-admin-email", email)
        .header("x-admin-password", password)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_as_admin(app: &TestApp, uri: &str) -> Response<Body> {
    get_as(app, uri, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a URL-encoded form built from `fields`.
pub async fn post_form(app: &TestApp, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// POST `body` verbatim with the given content type.
pub async fn post_raw(app: &TestApp, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body should be JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("response body should be UTF-8")
}
