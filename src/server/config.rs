use std::path::PathBuf;

use crate::server::error::config::ConfigError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SESSION_SECRET: &str = "p3finals-secret-key-2024";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

pub struct Config {
    pub port: u16,
    pub session_secret: String,
    pub mongo_uri: Option<String>,
    pub session_store_url: Option<String>,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match optional("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let session_secret = optional("SESSION_SECRET").unwrap_or_else(|| {
            tracing::warn!("SESSION_SECRET is not set, falling back to the built-in development secret");
            DEFAULT_SESSION_SECRET.to_string()
        });

        Ok(Self {
            port,
            session_secret,
            mongo_uri: optional("MONGO_URI"),
            session_store_url: optional("SESSION_STORE_URL"),
            email_user: optional("EMAIL_USER"),
            email_pass: optional("EMAIL_PASS"),
            public_dir: PathBuf::from(
                optional("PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string()),
            ),
        })
    }
}

// Empty values count as unset so a blank line in .env behaves like a missing one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

// The one configuration value that can be present yet unusable; everything
// else is free-form or optional.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidEnvValue {
        var: "PORT".to_string(),
        reason: format!("expected a TCP port number, got {raw:?}"),
    })
}
