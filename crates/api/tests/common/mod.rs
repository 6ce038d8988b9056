#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trackflow_api::config::{Environment, ServerConfig};
use trackflow_api::router::build_app_router;
use trackflow_api::runner::{GithubRunner, JobRunner, SimulatedRunner};
use trackflow_api::state::AppState;
use trackflow_core::store::ProofStore;
use trackflow_core::MemoryProofStore;

/// Mock-proof delay used by the development-mode test app. Short
/// enough to await in a test, long enough to observe the pending
/// window first.
pub const TEST_MOCK_DELAY: Duration = Duration::from_millis(100);

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(environment: Environment) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        environment,
        github_pat: None,
        github_dispatch_repo: "owner/repo".to_string(),
        mock_proof_delay_secs: 15,
    }
}

fn build_app(config: ServerConfig, runner: Arc<dyn JobRunner>, store: Arc<dyn ProofStore>) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        runner,
    };
    build_app_router(state, &config)
}

/// App wired like a development deployment: simulated runner with the
/// short [`TEST_MOCK_DELAY`].
pub fn dev_app() -> Router {
    let store: Arc<dyn ProofStore> = Arc::new(MemoryProofStore::new());
    let runner = Arc::new(SimulatedRunner::new(Arc::clone(&store), TEST_MOCK_DELAY));
    build_app(test_config(Environment::Development), runner, store)
}

/// App wired like a production deployment with no GitHub token
/// configured: dispatches fail, and the mock fallback does not exist.
pub fn prod_app_without_token() -> Router {
    let store: Arc<dyn ProofStore> = Arc::new(MemoryProofStore::new());
    let runner = Arc::new(GithubRunner::new("owner/repo".to_string(), None));
    build_app(test_config(Environment::Production), runner, store)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a raw (possibly invalid) body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert that a response is a `202 {"status":"pending"}`.
pub async fn assert_pending(response: Response) {
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
}
