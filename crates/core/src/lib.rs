//! Domain types and shared services for the TrackFlow proof service.
//!
//! This crate holds everything the HTTP layer and the polling client
//! have in common: the task model, proof outcome types, job-identifier
//! generation, the proof result store, and the development-only mock
//! completion scheduler.

pub mod error;
pub mod job;
pub mod mock;
pub mod proof;
pub mod store;
pub mod task;

pub use error::CoreError;
pub use mock::MockScheduler;
pub use proof::{ProofOutcome, TaskProof};
pub use store::{MemoryProofStore, ProofStore};
pub use task::{Category, Task, TaskStats, MAX_TASK_TEXT_LEN};
