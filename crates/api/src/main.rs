use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trackflow_api::config::{Environment, ServerConfig};
use trackflow_api::router::build_app_router;
use trackflow_api::runner::{GithubRunner, JobRunner, SimulatedRunner};
use trackflow_api::state::AppState;
use trackflow_core::store::ProofStore;
use trackflow_core::MemoryProofStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trackflow_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = ?config.environment,
        "Loaded server configuration"
    );

    if config.github_pat.is_none() {
        tracing::warn!("GITHUB_PAT environment variable is not set; dispatches will fail");
    }

    // --- Proof store ---
    let store: Arc<dyn ProofStore> = Arc::new(MemoryProofStore::new());

    // --- Job runner ---
    // Selected once here by deployment environment; the simulated
    // backend (and with it the mock scheduler) is never constructed in
    // production.
    let runner: Arc<dyn JobRunner> = match config.environment {
        Environment::Production => Arc::new(GithubRunner::new(
            config.github_dispatch_repo.clone(),
            config.github_pat.clone(),
        )),
        Environment::Development => {
            tracing::info!(
                delay_secs = config.mock_proof_delay_secs,
                "Development mode: using simulated job runner"
            );
            Arc::new(SimulatedRunner::new(
                Arc::clone(&store),
                Duration::from_secs(config.mock_proof_delay_secs),
            ))
        }
    };

    // --- App state / router ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        runner: Arc::clone(&runner),
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

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    runner.shutdown();
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
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
