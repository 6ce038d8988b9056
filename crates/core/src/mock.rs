//! Delayed mock-proof synthesis for local development.
//!
//! When no real job runner is wired up, [`MockScheduler`] arms a timer
//! per job identifier and writes a placeholder [`TaskProof`] to the
//! proof store once the delay elapses. Timers are superseding (a second
//! schedule for the same identifier restarts the clock) and are
//! cancelled outright when a real callback arrives first.
//!
//! Only the simulated job runner constructs one of these; the
//! production code path never does.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::proof::{ProofOutcome, TaskProof};
use crate::store::ProofStore;

/// An armed timer for one job identifier.
struct PendingTimer {
    /// Distinguishes this timer from a superseded one for the same id.
    generation: u64,
    handle: tokio::task::JoinHandle<()>,
}

/// Schedules delayed mock completions into a [`ProofStore`].
pub struct MockScheduler {
    store: Arc<dyn ProofStore>,
    delay: Duration,
    pending: Mutex<HashMap<String, PendingTimer>>,
    next_generation: AtomicU64,
}

impl MockScheduler {
    pub fn new(store: Arc<dyn ProofStore>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            store,
            delay,
            pending: Mutex::new(HashMap::new()),
            next_generation: AtomicU64::new(0),
        })
    }

    /// Arm (or re-arm) the mock timer for a job.
    ///
    /// Any timer already pending for this identifier is aborted and
    /// replaced, so the delay always runs from the latest call --
    /// timers supersede, they never stack.
    pub fn schedule(self: &Arc<Self>, job_id: &str) {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let this = Arc::clone(self);
        let id = job_id.to_string();

        // Hold the lock across the spawn so the timer cannot observe
        // the map before its own handle is registered.
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());

        let handle = tokio::spawn(async move {
            tokio::time::sleep(this.delay).await;
            // Claim before writing: if a real callback (or a newer
            // schedule) removed this timer in the meantime, the claim
            // fails and no mock result is written.
            if this.claim(&id, generation) {
                tracing::info!(job_id = %id, "Synthesizing mock proof");
                let proof = serde_json::to_value(TaskProof::mock(&id))
                    .unwrap_or(serde_json::Value::Null);
                this.store.put(&id, ProofOutcome::Completed(proof)).await;
            }
        });

        if let Some(prev) = pending.insert(
            job_id.to_string(),
            PendingTimer { generation, handle },
        ) {
            tracing::debug!(job_id, "Superseding pending mock timer");
            prev.handle.abort();
        }
    }

    /// Cancel the pending timer for a job, if any.
    ///
    /// Called when a real callback arrives: the real result always
    /// takes precedence over a synthesized one.
    pub fn cancel(&self, job_id: &str) {
        let removed = {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            pending.remove(job_id)
        };
        if let Some(timer) = removed {
            timer.handle.abort();
            tracing::debug!(job_id, "Cancelled pending mock timer");
        }
    }

    /// Whether a mock timer is currently outstanding for a job.
    pub fn is_pending(&self, job_id: &str) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(job_id)
    }

    /// Abort every outstanding timer. Used on graceful shutdown.
    pub fn shutdown(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        for (_, timer) in pending.drain() {
            timer.handle.abort();
        }
    }

    /// Remove this timer's own entry if it is still the registered one.
    ///
    /// Returns `false` when the entry is gone or belongs to a newer
    /// generation, in which case the caller must not write its result.
    fn claim(&self, job_id: &str, generation: u64) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        match pending.get(job_id) {
            Some(timer) if timer.generation == generation => {
                pending.remove(job_id);
                true
            }
            _ => false,
        }
    }
}
