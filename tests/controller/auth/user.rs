use axum::http::StatusCode;
use heimdall_test_utils::prelude::*;

use crate::util::setup::{login, test_app};

#[tokio::test]
/// Expect 200 with a null user for an anonymous visitor, not an error
async fn reports_null_user_when_anonymous() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app.client.get("/api/auth/user").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()?["user"].is_null());
    Ok(())
}

#[tokio::test]
/// Expect the logged-in identity on every request after login
async fn reports_identity_after_login() -> Result<(), TestError> {
    let mut app = test_app().await?;
    login(&mut app, "alice", "admin-pass").await?;

    let response = app.client.get("/api/auth/user").await?;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json()?;
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "admin");

    // The identity sticks across further requests on the same cookie.
    let response = app.client.get("/api/auth/user").await?;
    assert_eq!(response.json()?["user"]["username"], "alice");
    Ok(())
}
