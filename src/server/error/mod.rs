//! Error types for the Heimdall server application.
//!
//! This module provides the error handling system for the portal, with
//! specialized error types for each domain (authentication, configuration,
//! password reset, uploads). All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for ergonomic error definitions.

pub mod auth;
pub mod config;
pub mod reset;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, reset::ResetError, upload::UploadError,
    },
};

/// Main error type for the Heimdall server application.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error type. `thiserror`'s `#[from]` attribute enables
/// automatic conversion from underlying error types via the `?` operator, and
/// the `IntoResponse` implementation maps errors to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (unusable environment variable values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing or insufficient role).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Password reset error (invalid or expired token).
    #[error(transparent)]
    ResetError(#[from] ResetError),
    /// File upload error (malformed multipart body, unusable file name, IO).
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// The account directory has no database behind it.
    ///
    /// Raised when a handler needs MongoDB but `MONGO_URI` was never set. A
    /// configured-but-unreachable database surfaces as [`Error::DbError`]
    /// instead, once a query actually runs.
    #[error("Database is unavailable: {0}")]
    DatabaseUnavailable(String),
    /// Internal error indicating a bug in Heimdall's code.
    ///
    /// This error should never occur in normal operation and indicates a
    /// programming error that needs to be reported as a GitHub issue.
    #[error("Internal error with Heimdall's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbError(#[from] mongodb::error::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own mappings; everything else is treated as an
/// internal server error (500) with logging.
///
/// # Returns
/// - 400 Bad Request - Malformed reset tokens and upload bodies
/// - 401/403 - Authentication and authorization failures
/// - 503 Service Unavailable - Database-dependent requests without a database
/// - 500 Internal Server Error - All other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ResetError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::DatabaseUnavailable(reason) => {
                tracing::error!(reason, "request needed the database but none is configured");

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "The database is not available right now, please try again later."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body
/// to the client so implementation details never leak. Used as the fallback
/// for errors without a specific HTTP mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
