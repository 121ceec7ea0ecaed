use std::sync::Arc;

use axum::http::StatusCode;
use axum::{middleware, Router};
use heimdall::model::user::Role;
use heimdall::server::model::app::AppState;
use heimdall::server::service::directory::MemoryDirectory;
use heimdall::server::service::mailer::MemoryMailer;
use heimdall::server::service::policy::RolePolicy;
use heimdall::server::service::reset::ResetTokens;
use heimdall::server::service::upload::FsUploadStore;
use heimdall::server::store::MemorySessionStore;
use heimdall::server::{gate, router, startup};
use heimdall_test_utils::prelude::*;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Markup served from the temporary public directory's index.html.
pub const INDEX_HTML: &[u8] = b"<html><body>Campus Portal</body></html>";

/// A router wired exactly like production, with in-memory collaborators the
/// tests can inspect.
pub struct TestApp {
    pub client: TestClient,
    pub directory: Arc<MemoryDirectory>,
    pub mailer: Arc<MemoryMailer>,
    pub store: MemorySessionStore,
    pub public_dir: TempDir,
}

pub async fn test_app() -> Result<TestApp, TestError> {
    test_app_with_secret(TEST_SECRET).await
}

/// Build an app signing its session cookies with `secret`. Two apps built
/// with different secrets reject each other's cookies.
pub async fn test_app_with_secret(secret: &str) -> Result<TestApp, TestError> {
    let context = TestBuilder::new()
        .with_public_file("index.html", INDEX_HTML)
        .with_public_file("TestImages/seeded.png", fixtures::TEST_PNG)
        .build()?;

    let directory = Arc::new(MemoryDirectory::new());
    directory.add_user(
        "alice",
        "admin-pass",
        "alice@campus.edu",
        "Alice Whitlock",
        Role::Admin,
    );
    directory.add_user(
        "diana",
        "dean-pass",
        "diana@campus.edu",
        "Diana Holt",
        Role::Dean,
    );
    directory.add_user(
        "bob",
        "member-pass",
        "bob@campus.edu",
        "Bob Tran",
        Role::Member,
    );

    let mailer = Arc::new(MemoryMailer::new());
    let store = MemorySessionStore::default();

    let state = AppState {
        directory: directory.clone(),
        policy: Arc::new(RolePolicy),
        mailer: mailer.clone(),
        reset_tokens: Arc::new(ResetTokens::with_default_ttl()),
        uploads: Arc::new(FsUploadStore::new(
            context.public_dir.path().join("TestImages"),
        )),
    };

    let app: Router = router::routes(state, context.public_dir.path())
        .layer(middleware::from_fn(gate::session_gate))
        .layer(startup::session_layer(store.clone(), secret));

    Ok(TestApp {
        client: TestClient::new(app),
        directory,
        mailer,
        store,
        public_dir: context.public_dir,
    })
}

/// Log `username` in through the real endpoint, leaving the session cookie
/// in the client's jar.
pub async fn login(app: &mut TestApp, username: &str, password: &str) -> Result<(), TestError> {
    let response = app
        .client
        .post_json(
            "/api/auth/login",
            &serde_json::json!({ "username": username, "password": password }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::OK);
    Ok(())
}
