use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confera_api::app;
use confera_api::config::ServerConfig;
use confera_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST is not a valid IP address"),
        config.port,
    );

    let pool = connect_database().await;

    let router = app::build_router(AppState {
        pool,
        config: Arc::new(config),
    });

    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("could not bind listener");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server exited with an error");

    tracing::info!("Shutdown complete");
}

/// Log to stdout, filtered by `RUST_LOG` when set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confera_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to PostgreSQL, verify the connection, and apply migrations.
/// Any failure aborts startup.
async fn connect_database() -> confera_db::DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = confera_db::create_pool(&database_url)
        .await
        .expect("could not open a database connection");

    confera_db::health_check(&pool)
        .await
        .expect("database unreachable");

    confera_db::run_migrations(&pool)
        .await
        .expect("migration run failed");

    tracing::info!("Database ready");
    pool
}

/// Resolve on SIGINT or SIGTERM so `axum::serve` drains in-flight requests
/// before exiting, whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("could not install the Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("could not install the SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
