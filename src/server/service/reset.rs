//! Password reset token bookkeeping.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use rand::{distr::Alphanumeric, Rng};
use time::{Duration, OffsetDateTime};

use crate::server::error::{reset::ResetError, Error};

/// How long an issued reset token stays redeemable.
pub const RESET_TOKEN_TTL: Duration = Duration::minutes(30);

const TOKEN_LENGTH: usize = 48;

struct ResetClaim {
    username: String,
    expires_at: OffsetDateTime,
}

/// Single-use password reset tokens with a bounded lifetime.
///
/// Tokens live in server memory, so a restart invalidates anything
/// outstanding. Issuing prunes expired entries, which keeps the map from
/// growing without bound.
pub struct ResetTokens {
    ttl: Duration,
    claims: Mutex<HashMap<String, ResetClaim>>,
}

impl ResetTokens {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            claims: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(RESET_TOKEN_TTL)
    }

    /// Issue a fresh token for `username`. Earlier tokens for the same
    /// account stay valid until redeemed or expired.
    pub fn issue(&self, username: &str) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        let now = OffsetDateTime::now_utc();

        let mut claims = self.claims();
        claims.retain(|_, claim| claim.expires_at > now);
        claims.insert(
            token.clone(),
            ResetClaim {
                username: username.to_string(),
                expires_at: now + self.ttl,
            },
        );

        token
    }

    /// Redeem a token for the username it was issued to.
    ///
    /// Each token works exactly once. Unknown, already-used, and expired
    /// tokens are rejected identically.
    pub fn consume(&self, token: &str) -> Result<String, Error> {
        let claim = self
            .claims()
            .remove(token)
            .ok_or(ResetError::InvalidToken)?;

        if claim.expires_at <= OffsetDateTime::now_utc() {
            return Err(ResetError::InvalidToken.into());
        }

        Ok(claim.username)
    }

    fn claims(&self) -> MutexGuard<'_, HashMap<String, ResetClaim>> {
        self.claims
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
