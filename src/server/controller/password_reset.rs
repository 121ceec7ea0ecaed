use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{ForgotPasswordDto, ResetPasswordDto},
    },
    server::{error::Error, model::app::AppState},
};

pub static PASSWORD_TAG: &str = "password";

/// Starts a password reset for the account behind an email address
///
/// Always answers 202 with the same message whether or not the address is
/// known, so the endpoint cannot be used to probe which emails have accounts.
///
/// # Responses
/// - 202 (Accepted): Request taken; a reset message is on its way if the account exists
/// - 503 (Service Unavailable): The account directory has no database behind it
/// - 500 (Internal Server Error): Directory lookup or mail handoff failed
#[utoipa::path(
    post,
    path = "/api/password/forgot",
    tag = PASSWORD_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 202, description = "Reset request accepted", body = MessageDto),
        (status = 503, description = "Account directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    match state.directory.find_by_email(&request.email).await? {
        Some(user) => {
            let token = state.reset_tokens.issue(&user.username);
            state
                .mailer
                .send_password_reset(&request.email, &token)
                .await?;
        }
        None => {
            tracing::debug!(email = %request.email, "password reset requested for unknown email");
        }
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto {
            message: "If that email belongs to an account, a reset message has been sent."
                .to_string(),
        }),
    ))
}

/// Completes a password reset with a token from the reset message
///
/// # Responses
/// - 200 (OK): Password replaced, the account can log in with it immediately
/// - 400 (Bad Request): Token is unknown, already used, or expired
/// - 503 (Service Unavailable): The account directory has no database behind it
/// - 500 (Internal Server Error): Directory update failed
#[utoipa::path(
    post,
    path = "/api/password/reset",
    tag = PASSWORD_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Invalid or expired reset token", body = ErrorDto),
        (status = 503, description = "Account directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    // The token is burned before the directory write; a failed write needs a
    // freshly requested token.
    let username = state.reset_tokens.consume(&request.token)?;

    state
        .directory
        .set_password(&username, &request.new_password)
        .await?;

    tracing::info!(username = %username, "password reset completed");

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your password has been updated, you can log in with it now.".to_string(),
        }),
    ))
}
