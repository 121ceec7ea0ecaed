use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// File upload failures.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The multipart body could not be read.
    #[error(transparent)]
    Malformed(#[from] MultipartError),
    /// The form contained no `file` part.
    #[error("Upload form is missing a \"file\" part")]
    MissingFile,
    /// The client-supplied file name sanitized down to nothing.
    #[error("Uploaded file name {0:?} is not usable")]
    InvalidFileName(String),
    /// Writing the file to the public directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::Malformed(err) => {
                tracing::debug!("{}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "The upload could not be read, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MissingFile => {
                tracing::debug!("{}", Self::MissingFile);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "No file was attached to the upload.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidFileName(name) => {
                tracing::debug!(name, "rejected upload file name");

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "The uploaded file has an unusable name.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Io(err) => InternalServerError(err).into_response(),
        }
    }
}
