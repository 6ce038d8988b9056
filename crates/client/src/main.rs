//! `trackflow-client` -- command-line demo of the proving protocol.
//!
//! Submits a small task list to a running TrackFlow proof service and
//! polls until the proof arrives (or the attempt cap / Ctrl-C ends the
//! wait).
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                 | Description                |
//! |----------------------|----------|-------------------------|----------------------------|
//! | `TRACKFLOW_URL`      | no       | `http://localhost:3000` | Proof service base URL     |
//! | `POLL_INTERVAL_SECS` | no       | `3`                     | Seconds between polls      |

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trackflow_client::{PollOutcome, ProofClient};
use trackflow_core::{Category, Task};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trackflow_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("TRACKFLOW_URL").unwrap_or_else(|_| "http://localhost:3000".into());

    let poll_interval_secs: u64 = std::env::var("POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3);

    let client = ProofClient::new(&base_url)
        .with_poll_interval(Duration::from_secs(poll_interval_secs));

    let tasks: Vec<Task> = [
        ("write spec", true, Category::Work),
        ("buy milk", false, Category::Personal),
        ("revise notes", true, Category::Study),
    ]
    .into_iter()
    .filter_map(|(text, done, category)| Task::new(text, done, category))
    .collect();

    tracing::info!(url = %base_url, task_count = tasks.len(), "Submitting tasks for proving");

    let job_id = match client.submit(&tasks).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            std::process::exit(1);
        }
    };

    // Ctrl-C cancels the poll loop cleanly.
    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C, cancelling");
            cancel_on_signal.cancel();
        }
    });

    match client.wait_for_proof(&job_id, &cancel).await {
        Ok(PollOutcome::Completed(proof)) => {
            tracing::info!(job_id = %job_id, proof = %proof, "Proof received");
        }
        Ok(PollOutcome::Failed(message)) => {
            tracing::error!(job_id = %job_id, error = %message, "Proving failed");
            std::process::exit(1);
        }
        Ok(PollOutcome::TimedOut) => {
            tracing::error!(job_id = %job_id, "Timed out waiting for the proof");
            std::process::exit(1);
        }
        Ok(PollOutcome::Cancelled) => {
            tracing::info!(job_id = %job_id, "Cancelled");
        }
        Err(e) => {
            tracing::error!(job_id = %job_id, error = %e, "Polling failed");
            std::process::exit(1);
        }
    }
}
