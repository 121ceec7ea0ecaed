use axum::http::StatusCode;
use heimdall::server::startup::SESSION_COOKIE_NAME;
use heimdall_test_utils::prelude::*;
use serde_json::json;

use crate::util::setup::test_app;

#[tokio::test]
/// Expect 200 with the user in the body and a session cookie on the response
async fn accepts_valid_credentials() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json(
            "/api/auth/login",
            &json!({ "username": "bob", "password": "member-pass" }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.sets_cookie());

    let body = response.json()?;
    assert_eq!(body["user"]["username"], "bob");
    assert_eq!(body["user"]["display_name"], "Bob Tran");
    assert_eq!(body["user"]["role"], "member");

    assert!(app.client.cookie(SESSION_COOKIE_NAME).is_some());
    Ok(())
}

#[tokio::test]
/// Expect 401 with no session cookie when the password is wrong
async fn rejects_wrong_password() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json(
            "/api/auth/login",
            &json!({ "username": "bob", "password": "not-the-password" }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.sets_cookie());
    assert_eq!(response.json()?["error"], "Invalid username or password");
    assert!(app.client.cookie(SESSION_COOKIE_NAME).is_none());
    Ok(())
}

#[tokio::test]
/// Expect the same 401 for an unknown username as for a wrong password
async fn rejects_unknown_username() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json(
            "/api/auth/login",
            &json!({ "username": "nobody", "password": "member-pass" }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()?["error"], "Invalid username or password");
    Ok(())
}

#[tokio::test]
/// Expect a failed login to leave the visitor anonymous on later requests
async fn failed_login_leaves_no_session() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json(
            "/api/auth/login",
            &json!({ "username": "bob", "password": "wrong" }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.client.get("/api/auth/user").await?;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()?["user"].is_null());
    Ok(())
}
