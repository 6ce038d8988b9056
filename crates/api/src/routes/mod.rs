pub mod health;
pub mod proof_callback;
pub mod prove;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /prove              submit a task list for proving
/// POST /proof-callback     inbound result from the job runner
/// GET  /proof-callback     poll job status (?taskId=...)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/prove", post(prove::prove))
        .route(
            "/proof-callback",
            post(proof_callback::receive).get(proof_callback::poll),
        )
}
