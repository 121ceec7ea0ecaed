use serde::{Deserialize, Serialize};

use crate::model::user::SessionUser;

/// Landing payload for the admin pages.
#[derive(Clone, Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct AdminOverviewDto {
    /// Portal build serving the request
    pub portal_version: String,
    /// The admin viewing the page
    pub operator: SessionUser,
}

/// Landing payload for the dean section.
#[derive(Clone, Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct DeanOverviewDto {
    /// The dean viewing the section
    pub dean: SessionUser,
}
