use axum::http::StatusCode;
use heimdall_test_utils::prelude::*;

use crate::util::setup::{login, test_app};

#[tokio::test]
/// Expect the dean overview for a logged-in dean
async fn serves_overview_to_dean() -> Result<(), TestError> {
    let mut app = test_app().await?;
    login(&mut app, "diana", "dean-pass").await?;

    let response = app.client.get("/dean/overview").await?;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json()?;
    assert_eq!(body["dean"]["username"], "diana");
    assert_eq!(body["dean"]["role"], "dean");
    Ok(())
}

#[tokio::test]
/// Expect 403 for an admin on the dean section, roles do not stack
async fn rejects_admin() -> Result<(), TestError> {
    let mut app = test_app().await?;
    login(&mut app, "alice", "admin-pass").await?;

    let response = app.client.get("/dean/overview").await?;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    Ok(())
}
