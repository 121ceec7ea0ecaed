use axum::{http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, portal::DeanOverviewDto},
    server::{
        error::{auth::AuthError, Error},
        gate::CurrentUser,
    },
};

pub static DEAN_TAG: &str = "dean";

/// Landing data for the dean section
///
/// The dean gate layer has already rejected anonymous callers (401) and
/// non-dean roles (403) before this handler runs.
///
/// # Responses
/// - 200 (OK): Overview payload for the dean
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): Logged in without the dean role
#[utoipa::path(
    get,
    path = "/dean/overview",
    tag = DEAN_TAG,
    responses(
        (status = 200, description = "Dean overview", body = DeanOverviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Logged in without the dean role", body = ErrorDto)
    ),
)]
pub async fn overview(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, Error> {
    let dean = user.ok_or(AuthError::Unauthorized)?;

    Ok(Json(DeanOverviewDto { dean }))
}

/// Fallback for paths under `/dean` that match no dean page
///
/// Runs behind the dean gate like every other route in the section, so an
/// unknown dean path answers as the section (JSON 404 for a dean, 401/403
/// otherwise) instead of falling through to the public static assets.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: format!("No dean page at {}", uri.path()),
        }),
    )
}
