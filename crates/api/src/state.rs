use std::sync::Arc;

use trackflow_core::store::ProofStore;

use crate::config::ServerConfig;
use crate::runner::JobRunner;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store
/// and runner are trait objects so tests and deployments can inject
/// different implementations without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Proof-result storage keyed by job identifier.
    pub store: Arc<dyn ProofStore>,
    /// Job backend: GitHub dispatch in production, simulated locally.
    pub runner: Arc<dyn JobRunner>,
}
