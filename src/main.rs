use std::{net::SocketAddr, sync::Arc};

use axum::middleware;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heimdall::server::{
    config::Config,
    gate,
    model::app::AppState,
    router,
    service::{
        directory::MongoDirectory, policy::RolePolicy, reset::ResetTokens, upload::FsUploadStore,
    },
    startup::{self, SessionLayer},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    startup::log_environment(&config);

    let db = startup::connect_to_database(&config).await;
    let session = startup::connect_to_session(&config).await.unwrap();

    let state = AppState {
        directory: Arc::new(MongoDirectory::new(db)),
        policy: Arc::new(RolePolicy),
        mailer: startup::build_mailer(&config),
        reset_tokens: Arc::new(ResetTokens::with_default_ttl()),
        uploads: Arc::new(FsUploadStore::new(config.public_dir.join("TestImages"))),
    };

    tracing::info!("Starting server");

    let app = router::routes(state, &config.public_dir)
        .layer(middleware::from_fn(gate::session_gate));
    let app = match session {
        SessionLayer::Memory(layer) => app.layer(layer),
        SessionLayer::Redis(layer) => app.layer(layer),
    }
    .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await.unwrap();
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
