use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, upload::UploadReceiptDto},
    server::{
        error::{upload::UploadError, Error},
        model::app::AppState,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Accepts a multipart form upload into the public image directory
///
/// The first part named `file` is stored; its client-side file name is
/// sanitized and suffixed before it lands on disk. The stored file is
/// immediately served under `/TestImages`.
///
/// # Responses
/// - 201 (Created): File stored, body carries the stored name and URL
/// - 400 (Bad Request): Multipart body unreadable, no `file` part, or unusable file name
/// - 500 (Internal Server Error): Writing to the image directory failed
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    responses(
        (status = 201, description = "File stored", body = UploadReceiptDto),
        (status = 400, description = "Unusable upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(UploadError::Malformed)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_owned) else {
            return Err(UploadError::MissingFile.into());
        };
        let data = field.bytes().await.map_err(UploadError::Malformed)?;

        let receipt = state.uploads.store(&file_name, &data).await?;

        return Ok((StatusCode::CREATED, Json(receipt)));
    }

    Err(UploadError::MissingFile.into())
}
