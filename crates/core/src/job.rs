//! Job-identifier generation.

use rand::Rng;

/// Alphabet for job identifiers (lowercase base-36).
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated job identifier.
const JOB_ID_LEN: usize = 9;

/// Generate a short opaque job identifier.
///
/// Identifiers correlate a dispatch with its eventual callback and are
/// only required to be unique within the short window a job is live.
/// They are random but not cryptographically secure, and carry no
/// uniqueness guarantee across process restarts.
pub fn generate_job_id() -> String {
    let mut rng = rand::rng();
    (0..JOB_ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
