//! Polling client for the TrackFlow proof service.
//!
//! Implements the client side of the protocol: submit a task list via
//! `POST /prove`, then poll `GET /proof-callback?taskId=...` at a fixed
//! interval until a terminal state. Unlike the browser original, the
//! loop carries an explicit attempt cap and a cancellation token, so a
//! lost job surfaces as [`PollOutcome::TimedOut`] instead of polling
//! forever.

use std::time::Duration;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use trackflow_core::Task;

/// Default interval between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default maximum number of polls before giving up (5 minutes at the
/// default interval).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// HTTP request timeout for a single call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for client-side failures.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an application-level error.
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The server answered 2xx but the body made no sense.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Status of a single poll. The three states are disjoint and the
/// caller must handle all of them: keep polling on `Pending`, stop on
/// either terminal variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofStatus {
    Pending,
    Completed(serde_json::Value),
    Failed(String),
}

/// Terminal result of a full polling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The proof arrived.
    Completed(serde_json::Value),
    /// The job reported an application-level failure.
    Failed(String),
    /// The attempt cap was reached with the job still pending.
    TimedOut,
    /// The caller cancelled the loop.
    Cancelled,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(rename = "jobId")]
    job_id: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    proof: serde_json::Value,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client handle for one TrackFlow proof service.
pub struct ProofClient {
    http: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
    max_attempts: u32,
}

impl ProofClient {
    /// Create a client against `base_url` (e.g. `http://localhost:3000`)
    /// with the default poll interval and attempt cap.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the interval between polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the attempt cap (must be at least 1).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Submit a task list for proving. Returns the job identifier to
    /// poll with.
    pub async fn submit(&self, tasks: &[Task]) -> Result<String, ClientError> {
        let url = format!("{}/prove", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "tasks": tasks }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(server_error(status.as_u16(), response).await);
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))?;
        tracing::info!(job_id = %body.job_id, "Proving job submitted");
        Ok(body.job_id)
    }

    /// Ask once whether a job has finished.
    pub async fn poll(&self, job_id: &str) -> Result<ProofStatus, ClientError> {
        let url = format!("{}/proof-callback", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("taskId", job_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(server_error(status.as_u16(), response).await);
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))?;

        match body.status.as_str() {
            "pending" => Ok(ProofStatus::Pending),
            "completed" => Ok(ProofStatus::Completed(body.proof)),
            "failed" => Ok(ProofStatus::Failed(
                body.error.unwrap_or_else(|| "unknown failure".into()),
            )),
            other => Err(ClientError::UnexpectedResponse(format!(
                "unknown status '{other}'"
            ))),
        }
    }

    /// Poll until the job reaches a terminal state, the attempt cap is
    /// hit, or `cancel` fires.
    ///
    /// Transport and server errors abort the loop as `Err`; the four
    /// [`PollOutcome`] variants cover every other way out.
    pub async fn wait_for_proof(
        &self,
        job_id: &str,
        cancel: &CancellationToken,
    ) -> Result<PollOutcome, ClientError> {
        for attempt in 1..=self.max_attempts {
            if cancel.is_cancelled() {
                return Ok(PollOutcome::Cancelled);
            }

            match self.poll(job_id).await? {
                ProofStatus::Completed(proof) => {
                    tracing::info!(job_id, attempt, "Proof completed");
                    return Ok(PollOutcome::Completed(proof));
                }
                ProofStatus::Failed(message) => {
                    tracing::warn!(job_id, attempt, error = %message, "Proof failed");
                    return Ok(PollOutcome::Failed(message));
                }
                ProofStatus::Pending => {
                    tracing::debug!(job_id, attempt, "Proof still pending");
                }
            }

            if attempt == self.max_attempts {
                break;
            }

            tokio::select! {
                () = cancel.cancelled() => return Ok(PollOutcome::Cancelled),
                () = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        tracing::warn!(job_id, attempts = self.max_attempts, "Gave up waiting for proof");
        Ok(PollOutcome::TimedOut)
    }
}

/// Turn a non-2xx response into a [`ClientError::Server`], salvaging
/// the `error` field of the body when there is one.
async fn server_error(status: u16, response: reqwest::Response) -> ClientError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error.unwrap_or_else(|| "unknown server error".into()),
        Err(_) => "unknown server error".into(),
    };
    ClientError::Server { status, message }
}
