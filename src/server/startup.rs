use std::sync::Arc;

use sha2::{Digest, Sha512};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    ExpiredDeletion, Expiry, SessionManagerLayer, SessionStore,
};
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::{Config, DEFAULT_SESSION_SECRET},
    error::Error,
    service::mailer::{LogMailer, Mailer},
    store::MemorySessionStore,
};

/// Name of the session cookie issued to browsers.
pub const SESSION_COOKIE_NAME: &str = "heimdall.sid";

/// Database used when `MONGO_URI` carries no database path.
const DEFAULT_DATABASE: &str = "heimdall";

/// How often the in-memory session store is swept for expired records.
const SESSION_REAP_PERIOD: std::time::Duration = std::time::Duration::from_secs(60);

/// The session layer variants the server can run with.
///
/// Sessions live in server memory by default and in Redis when
/// `SESSION_STORE_URL` is set. The two layers have different types, but axum
/// erases the difference once one of them is applied to the router.
pub enum SessionLayer {
    Memory(SessionManagerLayer<MemorySessionStore, SignedCookie>),
    Redis(
        SessionManagerLayer<
            RedisStore<tower_sessions_redis_store::fred::prelude::Pool>,
            SignedCookie,
        >,
    ),
}

/// Configure session management, in memory by default or against Redis when
/// `SESSION_STORE_URL` is set
pub async fn connect_to_session(config: &Config) -> Result<SessionLayer, Error> {
    use tower_sessions_redis_store::fred::prelude::*;

    let Some(url) = &config.session_store_url else {
        let store = MemorySessionStore::default();

        tokio::task::spawn(
            store
                .clone()
                .continuously_delete_expired(SESSION_REAP_PERIOD),
        );

        return Ok(SessionLayer::Memory(session_layer(
            store,
            &config.session_secret,
        )));
    };

    let redis_config = Config::from_url(url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(SessionLayer::Redis(session_layer(
        RedisStore::new(pool),
        &config.session_secret,
    )))
}

/// Cookie and expiry settings shared by both session backends
pub fn session_layer<S: SessionStore>(store: S, secret: &str) -> SessionManagerLayer<S, SignedCookie> {
    // Cookies stay non-secure; the portal is served over plain HTTP on campus.
    SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)))
        .with_signed(signing_key(secret))
}

// Session cookies are signed with a key derived from SESSION_SECRET, so a
// cookie minted under one secret is rejected under any other.
fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());

    Key::from(digest.as_slice())
}

/// Connect lazily to MongoDB, reporting reachability in the background
///
/// Returns `None` when `MONGO_URI` is unset or unparseable; the server still
/// serves everything that does not need the account directory.
pub async fn connect_to_database(config: &Config) -> Option<mongodb::Database> {
    use mongodb::{bson::doc, Client};

    let Some(uri) = &config.mongo_uri else {
        tracing::error!("MONGO_URI is not set, the account directory will be unavailable");
        return None;
    };

    let client = match Client::with_uri_str(uri).await {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "MongoDB connection error");
            return None;
        }
    };

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    // The driver connects on first use; ping in the background so startup is
    // never blocked on an unreachable database.
    let ping_db = db.clone();
    tokio::spawn(async move {
        match ping_db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => tracing::info!("MongoDB connected"),
            Err(err) => tracing::error!(error = %err, "MongoDB connection error"),
        }
    });

    Some(db)
}

/// Build the outbound mailer; reset mail is logged rather than delivered
/// while no SMTP credentials are configured
pub fn build_mailer(config: &Config) -> Arc<dyn Mailer> {
    if config.email_user.is_none() || config.email_pass.is_none() {
        tracing::warn!("EMAIL_USER or EMAIL_PASS is not set, password reset mail cannot be delivered");
    }

    Arc::new(LogMailer::new(config.email_user.clone()))
}

/// Log which environment settings are present
pub fn log_environment(config: &Config) {
    tracing::info!(
        port = config.port,
        mongo_uri = config.mongo_uri.is_some(),
        custom_session_secret = config.session_secret != DEFAULT_SESSION_SECRET,
        session_store_url = config.session_store_url.is_some(),
        email_user = config.email_user.is_some(),
        email_pass = config.email_pass.is_some(),
        public_dir = %config.public_dir.display(),
        "environment check"
    );
}
