//! Error type for test utilities.

use thiserror::Error;

/// Wraps the errors test code runs into so tests can use `?` throughout.
#[derive(Error, Debug)]
pub enum TestError {
    /// Error interacting with a session
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Error from the backing session store
    #[error(transparent)]
    SessionStoreError(#[from] tower_sessions::session_store::Error),
    /// Filesystem error while preparing fixtures
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON body could not be serialized or parsed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Request could not be built
    #[error(transparent)]
    Http(#[from] axum::http::Error),
    /// Response body could not be read
    #[error(transparent)]
    Body(#[from] axum::Error),
}
