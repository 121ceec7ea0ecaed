use axum::http::StatusCode;
use heimdall::server::config::DEFAULT_SESSION_SECRET;
use heimdall::server::startup::SESSION_COOKIE_NAME;
use heimdall_test_utils::prelude::*;

use crate::util::setup::{login, test_app, test_app_with_secret, INDEX_HTML};

#[tokio::test]
/// Expect no Set-Cookie for a request that never writes to the session
async fn untouched_session_is_never_persisted() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app.client.get("/api/auth/user").await?;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.sets_cookie());

    let response = app.client.get("/").await?;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.sets_cookie());

    assert!(app.client.cookie(SESSION_COOKIE_NAME).is_none());
    Ok(())
}

#[tokio::test]
/// Expect a tampered cookie to downgrade to anonymous rather than error
async fn tampered_cookie_reads_as_anonymous() -> Result<(), TestError> {
    let mut app = test_app().await?;
    login(&mut app, "bob", "member-pass").await?;

    let cookie = app
        .client
        .cookie(SESSION_COOKIE_NAME)
        .expect("login sets the session cookie")
        .to_string();
    app.client.clear_cookies();
    app.client
        .insert_cookie(&format!("{SESSION_COOKIE_NAME}={cookie}garbage"));

    let response = app.client.get("/api/auth/user").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()?["user"].is_null());
    Ok(())
}

#[tokio::test]
/// Expect a made-up session id to read as anonymous
async fn unknown_cookie_reads_as_anonymous() -> Result<(), TestError> {
    let mut app = test_app().await?;
    app.client
        .insert_cookie(&format!("{SESSION_COOKIE_NAME}=bm90LWEtcmVhbC1zZXNzaW9u"));

    let response = app.client.get("/api/auth/user").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()?["user"].is_null());
    Ok(())
}

#[tokio::test]
/// Expect a cookie signed under one secret to be rejected under another
async fn cookies_do_not_cross_secrets() -> Result<(), TestError> {
    let mut first = test_app_with_secret("first-secret").await?;
    let mut second = test_app_with_secret("second-secret").await?;

    login(&mut first, "bob", "member-pass").await?;
    let cookie = first
        .client
        .cookie(SESSION_COOKIE_NAME)
        .expect("login sets the session cookie")
        .to_string();

    second
        .client
        .insert_cookie(&format!("{SESSION_COOKIE_NAME}={cookie}"));
    let response = second.client.get("/api/auth/user").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()?["user"].is_null());
    Ok(())
}

#[tokio::test]
/// Expect working sessions under the built-in fallback secret
async fn default_secret_issues_working_sessions() -> Result<(), TestError> {
    let mut app = test_app_with_secret(DEFAULT_SESSION_SECRET).await?;
    login(&mut app, "bob", "member-pass").await?;

    let response = app.client.get("/api/auth/user").await?;

    assert_eq!(response.json()?["user"]["username"], "bob");
    Ok(())
}

#[tokio::test]
/// Expect raw file bytes from the public image mount with no session writes
async fn serves_seeded_image_bytes() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app.client.get("/TestImages/seeded.png").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, fixtures::TEST_PNG);
    assert!(!response.sets_cookie());
    Ok(())
}

#[tokio::test]
/// Expect index.html from the static fallback at the root
async fn serves_index_at_root() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app.client.get("/").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, INDEX_HTML);
    Ok(())
}

#[tokio::test]
/// Expect unknown dean paths to answer as the dean section, not the assets
async fn dean_prefix_stays_in_the_dean_group() -> Result<(), TestError> {
    let mut app = test_app().await?;

    // Anonymous: the dean gate answers, not the static 404.
    let response = app.client.get("/dean/anything").await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Wrong role: still the dean gate.
    login(&mut app, "bob", "member-pass").await?;
    let response = app.client.get("/dean/anything").await?;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Right role, unknown page: the group-local 404.
    app.client.clear_cookies();
    login(&mut app, "diana", "dean-pass").await?;
    let response = app.client.get("/dean/anything").await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()?["error"], "No dean page at /dean/anything");
    Ok(())
}
