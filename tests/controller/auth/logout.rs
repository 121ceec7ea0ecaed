use axum::http::{header, StatusCode};
use heimdall::server::startup::SESSION_COOKIE_NAME;
use heimdall_test_utils::prelude::*;

use crate::util::setup::{login, test_app};

#[tokio::test]
/// Expect logout to redirect home and remove the session cookie
async fn destroys_session_and_redirects() -> Result<(), TestError> {
    let mut app = test_app().await?;
    login(&mut app, "bob", "member-pass").await?;

    let response = app.client.get("/api/auth/logout").await?;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap().to_str().unwrap(),
        "/"
    );
    // The removal Set-Cookie has an empty value, which clears the jar.
    assert!(app.client.cookie(SESSION_COOKIE_NAME).is_none());
    Ok(())
}

#[tokio::test]
/// Expect the identity to be gone on the request after logout
async fn later_requests_are_anonymous() -> Result<(), TestError> {
    let mut app = test_app().await?;
    login(&mut app, "diana", "dean-pass").await?;

    app.client.get("/api/auth/logout").await?;

    let response = app.client.get("/api/auth/user").await?;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()?["user"].is_null());
    Ok(())
}

#[tokio::test]
/// Expect logout to redirect even for a visitor who was never logged in
async fn redirects_for_anonymous_visitor() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app.client.get("/api/auth/logout").await?;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert!(!response.sets_cookie());
    Ok(())
}
