//! Duplicate candidates and detection reports
//!
//! The 0.9 / 0.8 similarity thresholds are a hard contract: at or above 0.9
//! the caller is advised to update the existing item, at or above 0.8 to
//! review it, and anything below 0.8 is never surfaced.

use crate::content::ItemId;
use serde::{Deserialize, Serialize};

/// Similarity at or above which the advice is [`DuplicateAdvice::Update`].
pub const UPDATE_THRESHOLD: f64 = 0.9;

/// Similarity at or above which the advice is [`DuplicateAdvice::Review`].
pub const REVIEW_THRESHOLD: f64 = 0.8;

/// What the caller should do about a near-duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateAdvice {
    /// The submission is close enough that the existing item should be
    /// updated instead of creating a new one
    Update,
    /// Similar enough to warrant a human look before creating
    Review,
}

impl DuplicateAdvice {
    /// Classify a similarity score against the contract thresholds.
    /// Boundary values resolve to the stronger advice.
    pub fn classify(similarity: f64) -> Option<Self> {
        if similarity >= UPDATE_THRESHOLD {
            Some(DuplicateAdvice::Update)
        } else if similarity >= REVIEW_THRESHOLD {
            Some(DuplicateAdvice::Review)
        } else {
            None
        }
    }
}

/// An existing item that is suspiciously similar to the submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    #[serde(rename = "existing_item_id")]
    pub item_id: ItemId,
    /// Similarity in [0, 1]; 1.0 means identical after normalization
    pub similarity: f64,
    #[serde(rename = "recommendation")]
    pub advice: DuplicateAdvice,
}

impl DuplicateCandidate {
    /// Build a candidate if the similarity clears the review threshold.
    pub fn surfaced(item_id: ItemId, similarity: f64) -> Option<Self> {
        DuplicateAdvice::classify(similarity).map(|advice| Self {
            item_id,
            similarity,
            advice,
        })
    }
}

/// Result of the duplicate-check phase. Computed once per submission and
/// discarded after the orchestrator's check unless the caller keeps it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// True when at least one candidate advises updating an existing item
    pub is_duplicate: bool,
    /// Candidates at or above the review threshold, strongest first
    pub candidates: Vec<DuplicateCandidate>,
    /// True when the similarity index was unavailable and only the
    /// exact-match check ran
    pub degraded: bool,
}

impl DuplicateReport {
    pub fn clean() -> Self {
        Self::default()
    }

    /// Strongest advice across the surfaced candidates.
    pub fn advice(&self) -> Option<DuplicateAdvice> {
        if self
            .candidates
            .iter()
            .any(|c| c.advice == DuplicateAdvice::Update)
        {
            Some(DuplicateAdvice::Update)
        } else if !self.candidates.is_empty() {
            Some(DuplicateAdvice::Review)
        } else {
            None
        }
    }
}
