use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use todo_api::{create_router, AppState};
use todo_tasks::{TaskService, TaskStore};
use tracing::{info, warn};

pub mod config;


use config::Config;

/// Install the global tracing subscriber, honouring RUST_LOG
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Connect the store, build the router and serve until a shutdown signal arrives
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Using {} task store", config.backend.as_str());

    let store = todo_tasks::storage::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open task store")?;
    store.ping().await.context("task store ping failed")?;

    let app = create_router(AppState::new(TaskService::new(store)));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Completes on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
