use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CurrentUserDto, LoginDto},
    },
    server::{
        error::{auth::AuthError, Error},
        gate::CurrentUser,
        model::{app::AppState, session::user::SessionCurrentUser},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs a user in with their portal username and password
///
/// The account directory decides whether the pair is valid; on success the
/// identity is written to the session, which is the write that makes the
/// session cookie appear on the response.
///
/// # Responses
/// - 200 (OK): Credentials accepted, body carries the logged-in user
/// - 401 (Unauthorized): Unknown username or wrong password, session untouched
/// - 503 (Service Unavailable): The account directory has no database behind it
/// - 500 (Internal Server Error): Database query or session write failed
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = CurrentUserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 503, description = "Account directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = state
        .directory
        .verify_credentials(&credentials.username, &credentials.password)
        .await?
    else {
        return Err(AuthError::InvalidCredentials.into());
    };

    SessionCurrentUser::insert(&session, &user).await?;

    tracing::info!(username = %user.username, "user logged in");

    Ok((StatusCode::OK, Json(CurrentUserDto { user: Some(user) })))
}

/// Logs the user out by destroying their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out (or was never logged in), redirect to the portal home
/// - 500 (Internal Server Error): There was an issue destroying the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session destroyed, redirecting to the portal home"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user = SessionCurrentUser::get(&session).await?;

    // Only destroy the session if there is actually a user in it
    //
    // This avoids creating and immediately deleting an empty session record
    // for visitors who were never logged in
    if maybe_user.is_some() {
        session.flush().await?;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the identity the session gate resolved for this request
///
/// Anonymous requests get `{"user": null}` with a 200 rather than an error,
/// so the front end can render both states from one call.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session identity, user is null when anonymous", body = CurrentUserDto),
    ),
)]
pub async fn get_user(CurrentUser(user): CurrentUser) -> Json<CurrentUserDto> {
    Json(CurrentUserDto { user })
}
