//! Integration tests for the development-mode mock completion fallback.
//!
//! These run against the development wiring (simulated runner, short
//! mock delay) and drive everything through the HTTP surface, the way
//! a browser client would.

mod common;

use axum::http::StatusCode;
use common::{assert_pending, body_json, get, post_json, TEST_MOCK_DELAY};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: polling synthesizes a mock proof after the delay
// ---------------------------------------------------------------------------

#[tokio::test]
async fn poll_arms_mock_and_completes_after_delay() {
    let app = common::dev_app();

    // Two polls within the delay window: both pending, and the second
    // must not restart the timer.
    assert_pending(get(app.clone(), "/proof-callback?taskId=abc123").await).await;
    assert_pending(get(app.clone(), "/proof-callback?taskId=abc123").await).await;

    tokio::time::sleep(TEST_MOCK_DELAY * 3).await;

    let response = get(app.clone(), "/proof-callback?taskId=abc123").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["proof"]["total_tasks"], 1);
    assert_eq!(body["proof"]["completed_tasks"], 1);
    assert!(body["proof"]["proof_hash"].is_string());

    // Evicted on read, as always.
    assert_pending(get(app, "/proof-callback?taskId=abc123").await).await;
}

// ---------------------------------------------------------------------------
// Test: a real callback beats the mock timer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn real_callback_cancels_the_pending_mock() {
    let app = common::dev_app();
    let proof = json!({ "total_tasks": 4, "completed_tasks": 2, "proof_hash": "cmVhbA==" });

    // Arm the mock timer, then let the "runner" report before it fires.
    assert_pending(get(app.clone(), "/proof-callback?taskId=abc123").await).await;
    post_json(
        app.clone(),
        "/proof-callback",
        json!({ "taskId": "abc123", "proof": proof }),
    )
    .await;

    // Wait well past the mock delay: only the real result may appear.
    tokio::time::sleep(TEST_MOCK_DELAY * 3).await;

    let body = body_json(get(app, "/proof-callback?taskId=abc123").await).await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["proof"], proof);
}

// ---------------------------------------------------------------------------
// Test: distinct identifiers get independent mock timers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mock_timers_are_per_job() {
    let app = common::dev_app();

    assert_pending(get(app.clone(), "/proof-callback?taskId=one").await).await;
    tokio::time::sleep(TEST_MOCK_DELAY * 3).await;
    assert_pending(get(app.clone(), "/proof-callback?taskId=two").await).await;

    // "one" has completed; "two" was only just armed.
    let body = body_json(get(app.clone(), "/proof-callback?taskId=one").await).await;
    assert_eq!(body["status"], "completed");
    assert_pending(get(app, "/proof-callback?taskId=two").await).await;
}
