//! Outbound mail seam for password reset messages.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::error::Error;

/// Sends password reset messages to account holders.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_password_reset(&self, to: &str, token: &str) -> Result<(), Error>;
}

/// Mailer used when no SMTP credentials are configured.
///
/// Nothing leaves the process; the request is logged and the token is only
/// visible at debug level for manual testing.
pub struct LogMailer {
    from: Option<String>,
}

impl LogMailer {
    pub fn new(from: Option<String>) -> Self {
        Self { from }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(&self, to: &str, token: &str) -> Result<(), Error> {
        tracing::info!(
            to,
            from = self.from.as_deref().unwrap_or("(unset)"),
            "password reset requested, mail delivery is not configured"
        );
        tracing::debug!(token, "reset token for manual delivery");

        Ok(())
    }
}

/// A password reset message captured by [`MemoryMailer`].
#[derive(Clone, Debug)]
pub struct ResetMail {
    pub to: String,
    pub token: String,
}

/// Recording mailer for tests.
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<ResetMail>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message sent so far, oldest first.
    pub fn sent(&self) -> Vec<ResetMail> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send_password_reset(&self, to: &str, token: &str) -> Result<(), Error> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(ResetMail {
                to: to.to_string(),
                token: token.to_string(),
            });

        Ok(())
    }
}
