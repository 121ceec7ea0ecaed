use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, portal::AdminOverviewDto},
    server::{
        error::Error,
        gate::CurrentUser,
        model::app::AppState,
        service::policy::RouteGroup,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Landing data for the portal administration pages
///
/// The access policy is consulted directly: anonymous callers get a 401
/// before any role check, members and deans get a 403.
///
/// # Responses
/// - 200 (OK): Overview payload for a logged-in admin
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): Logged in without the admin role
#[utoipa::path(
    get,
    path = "/api/admin/overview",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin overview", body = AdminOverviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Logged in without the admin role", body = ErrorDto)
    ),
)]
pub async fn overview(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let operator = state.policy.ensure(user.as_ref(), RouteGroup::Admin)?.clone();

    Ok(Json(AdminOverviewDto {
        portal_version: env!("CARGO_PKG_VERSION").to_string(),
        operator,
    }))
}
