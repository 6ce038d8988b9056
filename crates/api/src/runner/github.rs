//! Real job backend: GitHub Actions `repository_dispatch`.
//!
//! [`GithubRunner`] POSTs a `generate_proof` dispatch event carrying
//! the task list and job identifier to the configured repository. The
//! workflow posts its result back to `/proof-callback` when it
//! finishes.

use std::time::Duration;

use async_trait::async_trait;
use trackflow_core::Task;

use super::{DispatchError, JobRunner};

/// HTTP request timeout for a single dispatch attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatch event type the proving workflow is subscribed to.
const EVENT_TYPE: &str = "generate_proof";

/// Triggers proving jobs via the GitHub API.
pub struct GithubRunner {
    client: reqwest::Client,
    /// `owner/repo` whose workflow runs the prover.
    repo: String,
    /// Token authorizing `repository_dispatch`. `None` fails every
    /// dispatch with [`DispatchError::MissingToken`].
    token: Option<String>,
}

impl GithubRunner {
    /// Create a runner with a pre-configured HTTP client.
    pub fn new(repo: String, token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("trackflow-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            repo,
            token,
        }
    }
}

#[async_trait]
impl JobRunner for GithubRunner {
    async fn dispatch(&self, job_id: &str, tasks: &[Task]) -> Result<(), DispatchError> {
        let token = self.token.as_deref().ok_or(DispatchError::MissingToken)?;

        let url = format!("https://api.github.com/repos/{}/dispatches", self.repo);
        let payload = serde_json::json!({
            "event_type": EVENT_TYPE,
            "client_payload": {
                "tasks": tasks,
                "taskId": job_id,
            },
        });

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(job_id, status = status.as_u16(), %body, "GitHub dispatch rejected");
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(job_id, repo = %self.repo, "Proof workflow dispatched");
        Ok(())
    }

    async fn on_poll_pending(&self, _job_id: &str) {
        // Real jobs complete via the callback endpoint.
    }

    fn cancel_mock(&self, _job_id: &str) {}

    fn shutdown(&self) {}
}
