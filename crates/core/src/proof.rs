//! Proof payloads and stored outcomes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// The structured proof shape produced by the job runner.
///
/// `proof_hash` is an opaque binary digest in its transportable base64
/// text form. The server never inspects it; this type exists for the
/// mock synthesizer and for clients that want a typed view of the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProof {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub proof_hash: String,
}

impl TaskProof {
    /// Synthesize the development placeholder proof for a job.
    ///
    /// Always reports one task total, one completed, and a hash that is
    /// just `base64("mock_proof_for_<job_id>")`. This is a stand-in for
    /// local development, not a cryptographic result, and is trivially
    /// recognizable as such.
    pub fn mock(job_id: &str) -> Self {
        Self {
            total_tasks: 1,
            completed_tasks: 1,
            proof_hash: BASE64.encode(format!("mock_proof_for_{job_id}")),
        }
    }
}

/// Terminal outcome of a proving job, as held in the proof store.
///
/// Completed payloads are stored verbatim as JSON: the callback
/// receiver accepts whatever well-formed value the job runner sends and
/// never validates its internal shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofOutcome {
    Completed(serde_json::Value),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_proof_reports_single_completed_task() {
        let proof = TaskProof::mock("abc123");
        assert_eq!(proof.total_tasks, 1);
        assert_eq!(proof.completed_tasks, 1);
    }

    #[test]
    fn mock_proof_hash_is_derived_from_job_id() {
        let proof = TaskProof::mock("abc123");
        let decoded = BASE64.decode(proof.proof_hash).unwrap();
        assert_eq!(decoded, b"mock_proof_for_abc123");
    }

    #[test]
    fn task_proof_serializes_snake_case() {
        let proof = TaskProof {
            total_tasks: 3,
            completed_tasks: 2,
            proof_hash: "aGVsbG8=".into(),
        };
        let json = serde_json::to_value(&proof).unwrap();
        assert_eq!(json["total_tasks"], 3);
        assert_eq!(json["completed_tasks"], 2);
        assert_eq!(json["proof_hash"], "aGVsbG8=");
    }
}
