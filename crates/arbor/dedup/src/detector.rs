//! The duplicate detector
//!
//! Exact fingerprint lookup first, then a bounded token-overlap scan over
//! items of the same declared type. Read-only with no failure path: index
//! unavailability degrades the check instead of blocking creation.

use crate::fingerprint::Fingerprint;
use crate::normalize::{normalize, tokens};
use crate::snapshot::{CorpusSnapshot, IndexedItem};
use arbor_types::{ContentSubmission, DuplicateCandidate, DuplicateReport};
use std::collections::BTreeSet;
use tracing::debug;

/// Stateless duplicate detector over injected corpus snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct DuplicateDetector;

impl DuplicateDetector {
    pub fn new() -> Self {
        Self
    }

    /// Check a submission against the corpus snapshot.
    pub fn detect(&self, snapshot: &CorpusSnapshot, submission: &ContentSubmission) -> DuplicateReport {
        let fingerprint = Fingerprint::of(submission);

        // Exact duplicate: identical normalized content.
        if let Some(item_id) = snapshot.exact_match(&fingerprint) {
            debug!(
                fingerprint = %fingerprint.short(),
                item_id = %item_id,
                "Exact duplicate found"
            );
            let candidate = DuplicateCandidate::surfaced(item_id.clone(), 1.0)
                .expect("similarity 1.0 always clears the update threshold");
            return DuplicateReport {
                is_duplicate: true,
                candidates: vec![candidate],
                degraded: false,
            };
        }

        // Approximate scan, bounded to items of the same declared type.
        let Some(candidates) = snapshot.candidates_for(submission.declared_type) else {
            debug!(
                fingerprint = %fingerprint.short(),
                "Similarity index unavailable, exact-match only"
            );
            return DuplicateReport {
                is_duplicate: false,
                candidates: Vec::new(),
                degraded: true,
            };
        };

        let normalized = normalize(&format!("{} {}", submission.title, submission.body));
        let token_set: BTreeSet<String> = tokens(&normalized).map(str::to_string).collect();

        let mut surfaced: Vec<DuplicateCandidate> = candidates
            .iter()
            .filter_map(|existing| {
                let similarity = jaccard(&token_set, &existing.token_set);
                DuplicateCandidate::surfaced(existing.id.clone(), similarity)
            })
            .collect();
        surfaced.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let is_duplicate = surfaced
            .iter()
            .any(|c| c.advice == arbor_types::DuplicateAdvice::Update);

        if !surfaced.is_empty() {
            debug!(
                fingerprint = %fingerprint.short(),
                candidates = surfaced.len(),
                top_similarity = surfaced[0].similarity,
                "Near-duplicates surfaced"
            );
        }

        DuplicateReport {
            is_duplicate,
            candidates: surfaced,
            degraded: false,
        }
    }

    /// Similarity between a submission and one already-indexed item.
    /// Exposed for callers that keep their own candidate sets.
    pub fn similarity(&self, submission: &ContentSubmission, existing: &IndexedItem) -> f64 {
        if Fingerprint::of(submission) == existing.fingerprint {
            return 1.0;
        }
        let normalized = normalize(&format!("{} {}", submission.title, submission.body));
        let token_set: BTreeSet<String> = tokens(&normalized).map(str::to_string).collect();
        jaccard(&token_set, &existing.token_set)
    }
}

/// Jaccard overlap of two token sets.
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
