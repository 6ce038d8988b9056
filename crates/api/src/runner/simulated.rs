//! Simulated job backend for local development.
//!
//! Stands in for the GitHub-triggered prover so the whole
//! submit → poll → complete flow works offline: dispatch merely
//! acknowledges, and the first poll that finds neither a result nor a
//! pending timer arms a delayed mock completion.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use trackflow_core::store::ProofStore;
use trackflow_core::{MockScheduler, Task};

use super::{DispatchError, JobRunner};

/// Job backend that synthesizes results instead of proving anything.
pub struct SimulatedRunner {
    store: Arc<dyn ProofStore>,
    scheduler: Arc<MockScheduler>,
}

impl SimulatedRunner {
    pub fn new(store: Arc<dyn ProofStore>, mock_delay: Duration) -> Self {
        let scheduler = MockScheduler::new(Arc::clone(&store), mock_delay);
        Self { store, scheduler }
    }
}

#[async_trait]
impl JobRunner for SimulatedRunner {
    async fn dispatch(&self, job_id: &str, tasks: &[Task]) -> Result<(), DispatchError> {
        // No external runner to call; the mock timer is armed lazily by
        // the first poll, matching the callback-route behaviour this
        // simulates.
        tracing::info!(job_id, task_count = tasks.len(), "Simulated dispatch acknowledged");
        Ok(())
    }

    async fn on_poll_pending(&self, job_id: &str) {
        if self.store.contains(job_id).await || self.scheduler.is_pending(job_id) {
            return;
        }
        tracing::info!(job_id, "Arming mock proof timer");
        self.scheduler.schedule(job_id);
    }

    fn cancel_mock(&self, job_id: &str) {
        self.scheduler.cancel(job_id);
    }

    fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}
