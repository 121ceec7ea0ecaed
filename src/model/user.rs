use serde::{Deserialize, Serialize};

/// Portal role attached to every account.
///
/// Roles are flat, there is no hierarchy: a dean is not implicitly an admin
/// and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dean,
    Member,
}

/// The user identity carried by a logged-in session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionUser {
    /// Directory record id
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

/// Response body for endpoints that expose the current session identity.
///
/// `user` is `null` for anonymous requests; the status code is 200 either way.
#[derive(Clone, Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct CurrentUserDto {
    pub user: Option<SessionUser>,
}

/// Credentials submitted to the login endpoint
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Request body for starting a password reset
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
}

/// Request body for completing a password reset
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ResetPasswordDto {
    pub token: String,
    pub new_password: String,
}
