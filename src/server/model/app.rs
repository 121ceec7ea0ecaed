use std::sync::Arc;

use crate::server::service::{
    directory::UserDirectory, mailer::Mailer, policy::AccessPolicy, reset::ResetTokens,
    upload::UploadStore,
};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub policy: Arc<dyn AccessPolicy>,
    pub mailer: Arc<dyn Mailer>,
    pub reset_tokens: Arc<ResetTokens>,
    pub uploads: Arc<dyn UploadStore>,
}
