use serde::{Deserialize, Serialize};

/// Returned after a file lands in the public image directory.
#[derive(Clone, Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct UploadReceiptDto {
    /// Name the file was stored under, including the collision suffix
    pub file_name: String,
    /// Path the stored file is served from
    pub url: String,
}
