use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A plain confirmation message returned by endpoints with no other payload
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human-readable outcome of the request
    pub message: String,
}
