//! Keyed storage for finished proof results.
//!
//! The store maps a job identifier to its terminal [`ProofOutcome`].
//! Pending jobs have no entry at all; an entry appears when the
//! callback receiver (or the mock scheduler) writes one, and is
//! removed the moment a poller consumes it.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::proof::ProofOutcome;

/// Abstraction over proof-result storage.
///
/// Injected into the HTTP handlers as a trait object so the backing
/// implementation can be swapped (the in-memory map here, a durable
/// keyed store later) without touching the handlers.
#[async_trait]
pub trait ProofStore: Send + Sync {
    /// Store an outcome for a job, unconditionally overwriting any
    /// prior entry (last write wins).
    async fn put(&self, job_id: &str, outcome: ProofOutcome);

    /// Atomically remove and return the outcome for a job, if present.
    ///
    /// Lookup and removal happen under one lock, so concurrent polls
    /// for the same identifier deliver a terminal result at most once.
    async fn take(&self, job_id: &str) -> Option<ProofOutcome>;

    /// Whether an outcome is currently stored for a job.
    async fn contains(&self, job_id: &str) -> bool;
}

/// In-memory [`ProofStore`] backed by a `RwLock<HashMap>`.
///
/// Process-local: a restart loses all unconsumed results. Entries are
/// only ever removed individually by [`take`](ProofStore::take) or
/// overwritten by [`put`](ProofStore::put); there is no bulk expiry.
#[derive(Default)]
pub struct MemoryProofStore {
    results: RwLock<HashMap<String, ProofOutcome>>,
}

impl MemoryProofStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProofStore for MemoryProofStore {
    async fn put(&self, job_id: &str, outcome: ProofOutcome) {
        self.results
            .write()
            .await
            .insert(job_id.to_string(), outcome);
    }

    async fn take(&self, job_id: &str) -> Option<ProofOutcome> {
        self.results.write().await.remove(job_id)
    }

    async fn contains(&self, job_id: &str) -> bool {
        self.results.read().await.contains_key(job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[tokio::test]
    async fn take_on_unknown_id_returns_none() {
        let store = MemoryProofStore::new();
        assert!(store.take("nope").await.is_none());
        assert!(!store.contains("nope").await);
    }

    #[tokio::test]
    async fn take_evicts_the_entry() {
        let store = MemoryProofStore::new();
        store
            .put("abc123", ProofOutcome::Completed(json!({"total_tasks": 1})))
            .await;
        assert!(store.contains("abc123").await);

        let first = store.take("abc123").await;
        assert_matches!(first, Some(ProofOutcome::Completed(_)));

        // Read-once: the entry is gone after the first take.
        assert!(store.take("abc123").await.is_none());
        assert!(!store.contains("abc123").await);
    }

    #[tokio::test]
    async fn put_overwrites_prior_entry() {
        let store = MemoryProofStore::new();
        store
            .put("abc123", ProofOutcome::Failed("first".into()))
            .await;
        store
            .put("abc123", ProofOutcome::Completed(json!({"v": 2})))
            .await;

        let outcome = store.take("abc123").await;
        assert_matches!(outcome, Some(ProofOutcome::Completed(v)) => {
            assert_eq!(v["v"], 2);
        });
    }

    #[tokio::test]
    async fn entries_are_independent_per_job() {
        let store = MemoryProofStore::new();
        store.put("a", ProofOutcome::Failed("boom".into())).await;
        store
            .put("b", ProofOutcome::Completed(json!({"ok": true})))
            .await;

        assert_matches!(store.take("a").await, Some(ProofOutcome::Failed(msg)) => {
            assert_eq!(msg, "boom");
        });
        assert!(store.contains("b").await);
    }
}
