//! Handler for `POST /prove`: dispatch a proving job.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use trackflow_core::job::generate_job_id;
use trackflow_core::task::task_stats;
use trackflow_core::Task;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /prove`.
#[derive(Debug, Deserialize)]
pub struct ProveRequest {
    /// The full task list to prove over. May be empty; this layer does
    /// not reject an empty submission.
    pub tasks: Vec<Task>,
}

/// Success response for `POST /prove`.
#[derive(Debug, Serialize)]
pub struct ProveResponse {
    pub success: bool,
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub message: &'static str,
}

/// POST /prove
///
/// Allocates a job identifier, triggers the job runner, and returns the
/// identifier immediately -- the proof arrives later via the callback
/// endpoint and is retrieved by polling. No store entry is created
/// here; a pending job is simply one with no entry yet.
///
/// Dispatch failures (missing credential, runner rejection, network)
/// surface as a 500 with no identifier allocated to the client, which
/// must resubmit rather than poll.
pub async fn prove(
    State(state): State<AppState>,
    body: Result<Json<ProveRequest>, JsonRejection>,
) -> AppResult<Json<ProveResponse>> {
    let Json(request) = body.map_err(|e| AppError::MalformedPayload(e.body_text()))?;

    let stats = task_stats(&request.tasks);
    tracing::info!(
        total = stats.total,
        completed = stats.completed,
        "Received proving request"
    );

    let job_id = generate_job_id();
    state.runner.dispatch(&job_id, &request.tasks).await?;

    Ok(Json(ProveResponse {
        success: true,
        job_id,
        message: "Proof generation started. Check status using the jobId.",
    }))
}
