//! Departments Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use departments_engine::config::{load_dotenv_from_repo_root, EngineConfig};
use departments_engine::infrastructure::{
    clock::{SystemClock, SystemRandom},
    departments::SqliteDepartmentRepo,
};
use departments_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "departments_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Departments Engine");

    let config = EngineConfig::from_env();

    tracing::info!(path = %config.db_path, "Opening department store");
    let departments = Arc::new(SqliteDepartmentRepo::new(&config.db_path).await?);

    let app = Arc::new(App::new(
        departments,
        Arc::new(SystemClock::new()),
        Arc::new(SystemRandom::new()),
    ));

    let router = api::build_router(app, &config);

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Departments Engine stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
