use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment configuration failures raised during startup.
///
/// Every variable has a default or is optional, so the only way
/// configuration fails is a value that is present but unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is present but unusable.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// What made the value unusable
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
