use axum::http::StatusCode;
use heimdall_test_utils::prelude::*;
use serde_json::json;

use crate::util::setup::{login, test_app, TestApp};

/// Run the forgot flow for `email` and return the token the mailer captured.
async fn request_reset_token(app: &mut TestApp, email: &str) -> Result<String, TestError> {
    let response = app
        .client
        .post_json("/api/password/forgot", &json!({ "email": email }))
        .await?;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    let mail = app.mailer.sent().pop().expect("mailer captured a message");
    assert_eq!(mail.to, email);
    Ok(mail.token)
}

#[tokio::test]
/// Expect 202 and a captured reset message for a registered email
async fn forgot_mails_registered_account() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json("/api/password/forgot", &json!({ "email": "bob@campus.edu" }))
        .await?;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "bob@campus.edu");
    assert!(!sent[0].token.is_empty());
    Ok(())
}

#[tokio::test]
/// Expect the same 202 for an unknown email, with nothing mailed
async fn forgot_does_not_reveal_unknown_email() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json(
            "/api/password/forgot",
            &json!({ "email": "nobody@campus.edu" }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert!(app.mailer.sent().is_empty());
    Ok(())
}

#[tokio::test]
/// Expect a mailed token to replace the password end to end
async fn reset_replaces_the_password() -> Result<(), TestError> {
    let mut app = test_app().await?;
    let token = request_reset_token(&mut app, "bob@campus.edu").await?;

    let response = app
        .client
        .post_json(
            "/api/password/reset",
            &json!({ "token": token, "new_password": "a-new-password" }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::OK);

    // The old password is out, the new one logs in.
    let response = app
        .client
        .post_json(
            "/api/auth/login",
            &json!({ "username": "bob", "password": "member-pass" }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    login(&mut app, "bob", "a-new-password").await?;
    Ok(())
}

#[tokio::test]
/// Expect a token to stop working after its first redemption
async fn reset_tokens_are_single_use() -> Result<(), TestError> {
    let mut app = test_app().await?;
    let token = request_reset_token(&mut app, "bob@campus.edu").await?;

    let response = app
        .client
        .post_json(
            "/api/password/reset",
            &json!({ "token": token, "new_password": "a-new-password" }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .client
        .post_json(
            "/api/password/reset",
            &json!({ "token": token, "new_password": "another-password" }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
/// Expect 400 for a token that was never issued
async fn reset_rejects_unknown_token() -> Result<(), TestError> {
    let mut app = test_app().await?;

    let response = app
        .client
        .post_json(
            "/api/password/reset",
            &json!({ "token": "never-issued", "new_password": "a-new-password" }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()?["error"],
        "This password reset link is invalid or has expired, please request a new one."
    );
    Ok(())
}
