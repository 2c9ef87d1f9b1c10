/// NotesKeep Auth Service - Main entry point
use std::net::SocketAddr;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use noteskeep_auth::{config::Config, db, routes::api_router, security::JwtKeys, AppState};

/// How often the revocation sweep runs.
const REVOCATION_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting NotesKeep auth service on {}:{}",
        config.server_host,
        config.server_port
    );

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool initialized");

    sqlx::migrate!("./migrations").run(&db_pool).await?;

    tracing::info!("Migrations applied");

    let app_state = AppState {
        db: db_pool.clone(),
        jwt: JwtKeys::from_secret(&config.jwt_secret),
    };

    // Expired revocation records are inert, this just keeps the table bounded.
    tokio::spawn(revocation_sweep(db_pool));

    let router = api_router(app_state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Periodically delete revocation records past their natural expiry.
async fn revocation_sweep(pool: PgPool) {
    let mut interval = tokio::time::interval(REVOCATION_SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        match db::revoked_tokens::cleanup_expired(&pool).await {
            Ok(0) => {}
            Ok(deleted) => tracing::info!(deleted, "swept expired revocation records"),
            Err(err) => tracing::warn!(error = %err, "revocation sweep failed"),
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
