use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Password reset failures.
#[derive(Error, Debug)]
pub enum ResetError {
    /// The submitted token was never issued, was already used, or has expired.
    ///
    /// The three cases are deliberately indistinguishable to the caller.
    #[error("Password reset token is invalid or has expired")]
    InvalidToken,
}

impl IntoResponse for ResetError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidToken => {
                tracing::debug!("{}", Self::InvalidToken);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "This password reset link is invalid or has expired, please request a new one.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
