//! Pluggable job backends.
//!
//! The proving work itself happens out of process. The server only
//! needs two hooks: trigger a job at dispatch time, and (for the
//! simulated backend) react when a poll finds nothing yet. Selecting
//! the backend once at startup keeps the dev-only mock machinery out
//! of the production code path entirely.

pub mod github;
pub mod simulated;

pub use github::GithubRunner;
pub use simulated::SimulatedRunner;

use async_trait::async_trait;
use trackflow_core::Task;

/// Error type for job-dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No GitHub token is configured, so the workflow cannot be
    /// triggered. A startup-time warning and a per-request failure.
    #[error("GitHub token not configured")]
    MissingToken,

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The dispatch endpoint returned a non-2xx status code.
    #[error("GitHub API error: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A backend capable of running proving jobs.
#[async_trait]
pub trait JobRunner: Send + Sync {
    /// Trigger a proving job for the given task list.
    ///
    /// Fire-and-forget: awaits only the backend's acknowledgement of
    /// receipt, never the job's completion. Failures are surfaced to
    /// the dispatching client, which must resubmit -- there is no
    /// server-side retry.
    async fn dispatch(&self, job_id: &str, tasks: &[Task]) -> Result<(), DispatchError>;

    /// Hook invoked by the status poller when a poll finds no stored
    /// result for `job_id`.
    ///
    /// The real backend does nothing here (the result arrives via the
    /// callback endpoint). The simulated backend arms a mock-completion
    /// timer so local development sees a result without a runner.
    async fn on_poll_pending(&self, job_id: &str);

    /// Cancel any synthesized completion pending for `job_id`.
    ///
    /// Called by the callback receiver before storing a real result,
    /// which always takes precedence over a mock one. No-op for the
    /// real backend.
    fn cancel_mock(&self, job_id: &str);

    /// Abort any outstanding background work. Called on shutdown.
    fn shutdown(&self);
}
