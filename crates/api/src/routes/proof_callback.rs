//! Handlers for `/proof-callback`: the job runner posts finished
//! results here, and clients poll the same path for status.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use trackflow_core::{CoreError, ProofOutcome};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /proof-callback
///
/// Inbound notification from the job runner. The body must carry a
/// `taskId`; everything under `proof` (or `error`) is stored verbatim
/// -- this endpoint never validates the payload's internal shape.
/// Repeated callbacks for the same identifier overwrite (last write
/// wins), and a real result always cancels a pending mock timer.
pub async fn receive(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = body.map_err(|e| AppError::MalformedPayload(e.body_text()))?;

    let job_id = payload
        .get("taskId")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("taskId is required".into()))?
        .to_string();

    let outcome = match payload.get("error").and_then(|v| v.as_str()) {
        Some(message) => ProofOutcome::Failed(message.to_string()),
        None => {
            // Absent `proof` stores null; the shape is the runner's
            // business, not ours.
            let proof = payload.get("proof").cloned().unwrap_or(serde_json::Value::Null);
            ProofOutcome::Completed(proof)
        }
    };

    tracing::info!(job_id = %job_id, "Received proof callback");

    state.runner.cancel_mock(&job_id);
    state.store.put(&job_id, outcome).await;

    Ok(Json(json!({ "success": true })))
}

/// GET /proof-callback?taskId=ID
///
/// Poll the status of a proving job. Safe to call repeatedly; a
/// terminal result is delivered read-once (the returning poll evicts
/// the entry, so a subsequent poll reports pending again). When the
/// simulated backend is active and nothing is stored or pending for
/// the identifier, this poll arms the mock-completion timer.
pub async fn poll(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    let job_id = params
        .get("taskId")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("taskId is required".into()))?;

    // The fallback check runs before the read, mirroring the original
    // callback-route ordering.
    state.runner.on_poll_pending(job_id).await;

    match state.store.take(job_id).await {
        Some(ProofOutcome::Completed(proof)) => {
            tracing::info!(job_id = %job_id, "Delivering completed proof");
            Ok((
                StatusCode::OK,
                Json(json!({ "status": "completed", "proof": proof })),
            ))
        }
        Some(ProofOutcome::Failed(message)) => {
            tracing::info!(job_id = %job_id, "Delivering failed proof");
            Ok((
                StatusCode::OK,
                Json(json!({ "status": "failed", "error": message })),
            ))
        }
        None => Ok((
            StatusCode::ACCEPTED,
            Json(json!({ "status": "pending" })),
        )),
    }
}
