use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sava_api::config::ServerConfig;
use sava_api::router::build_app_router;
use sava_api::state::AppState;
use sava_api::{bootstrap, revalidation};
use sava_db::PgStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sava_api=debug,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sava_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    sava_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    sava_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let store = Arc::new(PgStore::new(pool.clone()));

    // --- First admin ---
    match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => {
            bootstrap::ensure_admin(store.as_ref(), &email, &password)
                .await
                .expect("Failed to bootstrap admin user");
        }
        _ => tracing::debug!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap"),
    }

    // --- Revalidation ---
    let revalidator = revalidation::from_config(&config.revalidate)
        .expect("Failed to build revalidation client");
    match &config.revalidate.url {
        Some(url) => tracing::info!(%url, "Revalidation endpoint configured"),
        None => tracing::warn!("REVALIDATE_URL not set, revalidation will only be logged"),
    }

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        revalidator: Arc::from(revalidator),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    server.await.expect("Server error");

    tracing::info!("Server stopped accepting connections, closing database pool");
    if tokio::time::timeout(shutdown_timeout, pool.close()).await.is_err() {
        tracing::warn!("Timed out closing database pool");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Resolve on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
