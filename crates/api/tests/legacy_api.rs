//! Integration tests for the root-level single-event form endpoints.

mod common;

use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::StatusCode;
use common::{
    blog_of, body_json, body_text, build_test_app, get, get_as_admin, post_form, post_raw,
    ADMIN_EMAIL, ADMIN_PASSWORD,
};
use contest_db::{ContestStore, SubmissionScope};

#[tokio::test]
async fn test_submit_redirects_to_success_page() {
    let app = build_test_app();
    let blog = blog_of(250);

    let response = post_form(
        &app,
        "/submit",
        &[
            ("name", "A"),
            ("email", "a@b.com"),
            ("phone", "123"),
            ("blog", &blog),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/success.html");

    let stored = app
        .store
        .list_submissions(SubmissionScope::Unassigned)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].event_id, None);
    assert_eq!(stored[0].word_count, 250);
}

#[tokio::test]
async fn test_submit_short_blog_is_plain_text_400() {
    let app = build_test_app();
    let blog = blog_of(249);

    let response = post_form(
        &app,
        "/submit",
        &[
            ("name", "A"),
            ("email", "a@b.com"),
            ("phone", "123"),
            ("blog", &blog),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(
        body_text(response).await,
        "Minimum 250 words required. You have 249 words."
    );

    let stored = app
        .store
        .list_submissions(SubmissionScope::Unassigned)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_submit_missing_field_is_plain_text_400() {
    let app = build_test_app();

    let response = post_form(
        &app,
        "/submit",
        &[("name", "A"), ("email", "a@b.com"), ("blog", "words")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "All fields are required.");
}

#[tokio::test]
async fn test_submit_malformed_body_is_plain_text_400() {
    let app = build_test_app();

    let response = post_raw(&app, "/submit", "application/json", "{bad").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert!(body_text(response).await.starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_admin_login_without_body_is_plain_text_401() {
    let app = build_test_app();

    let response = post_raw(&app, "/admin-login", "application/x-www-form-urlencoded", "").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Invalid admin credentials");
}

#[tokio::test]
async fn test_admin_login_redirects_on_success() {
    let app = build_test_app();

    let response = post_form(
        &app,
        "/admin-login",
        &[("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/admin.html");
}

#[tokio::test]
async fn test_admin_login_rejects_bad_credentials() {
    let app = build_test_app();

    let response = post_form(
        &app,
        "/admin-login",
        &[("email", ADMIN_EMAIL), ("password", "guess")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Invalid admin credentials");
}

#[tokio::test]
async fn test_submissions_listing_is_admin_only() {
    let app = build_test_app();
    let blog = blog_of(300);
    post_form(
        &app,
        "/submit",
        &[
            ("name", "A"),
            ("email", "a@b.com"),
            ("phone", "123"),
            ("blog", &blog),
        ],
    )
    .await;

    let response = get(&app, "/submissions").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_as_admin(&app, "/submissions").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let submissions = json.as_array().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0]["wordCount"], 300);
}
