//! Deterministic content fingerprints
//!
//! A fingerprint is the blake3 digest of normalized title and body under a
//! domain-separation tag. Identical normalized content always yields the
//! same fingerprint; fingerprints are computed and compared, never mutated.

use crate::normalize::normalize;
use arbor_types::ContentSubmission;
use serde::{Deserialize, Serialize};

/// A 32-byte digest of normalized content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Fingerprint a submission's normalized title and body.
    pub fn of(submission: &ContentSubmission) -> Self {
        Self::of_parts(&submission.title, &submission.body)
    }

    /// Fingerprint already-separated title and body text.
    pub fn of_parts(title: &str, body: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        // Domain separation tag
        hasher.update(b"arbor-content-v1:");
        hasher.update(normalize(title).as_bytes());
        hasher.update(b"\x1f");
        hasher.update(normalize(body).as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// First eight hex characters, for log lines.
    pub fn short(&self) -> String {
        self.to_hex()[..8].to_string()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
