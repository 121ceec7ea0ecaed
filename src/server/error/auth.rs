use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures raised by the login flow and the
/// route-group gates.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Login was attempted with a username/password pair the directory rejects.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// An anonymous request reached a page that requires a logged-in user.
    #[error("Authentication is required for this page")]
    Unauthorized,
    /// A logged-in user reached a page their role does not grant.
    #[error("Role does not grant access to this page")]
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid username or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Unauthorized => {
                tracing::debug!("{}", Self::Unauthorized);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "You must be logged in to view this page.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden => {
                tracing::debug!("{}", Self::Forbidden);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have access to this page.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
