//! Value assessment: dimension scores and the approval verdict
//!
//! The approval thresholds are part of the contract. A score that lands
//! exactly on a threshold resolves to the higher tier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall score at or above which an item is approved.
pub const APPROVAL_THRESHOLD: f64 = 0.7;

/// Overall score at or above which an item needs review; below it the item
/// is rejected.
pub const REVIEW_THRESHOLD: f64 = 0.5;

/// The scoring dimensions of a value assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    /// Proportion of high-value vs. generic tags
    TagValue,
    /// Coverage and confidence of generated FAQ pairs
    FaqUtility,
    /// Information retained by the summary relative to the source
    SummaryCompleteness,
    /// Fixed base value of the declared item type
    TypeBase,
}

impl DimensionKind {
    /// Weight of this dimension in the overall score. Weights renormalize
    /// over the dimensions actually present.
    pub fn weight(&self) -> f64 {
        match self {
            DimensionKind::TagValue => 0.3,
            DimensionKind::FaqUtility => 0.25,
            DimensionKind::SummaryCompleteness => 0.25,
            DimensionKind::TypeBase => 0.2,
        }
    }
}

/// Approval verdict for a finished item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Approved,
    NeedsReview,
    Rejected,
}

impl ApprovalStatus {
    /// Classify an overall score against the contract thresholds.
    pub fn from_score(score: f64) -> Self {
        if score >= APPROVAL_THRESHOLD {
            ApprovalStatus::Approved
        } else if score >= REVIEW_THRESHOLD {
            ApprovalStatus::NeedsReview
        } else {
            ApprovalStatus::Rejected
        }
    }
}

/// The multi-dimensional value assessment attached to a finished item.
/// Computed once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueAssessment {
    /// Scores for the dimensions that were actually present, each in [0, 1]
    pub dimension_scores: BTreeMap<DimensionKind, f64>,
    /// Weighted average over present dimensions, in [0, 1]
    pub overall_score: f64,
    pub approval: ApprovalStatus,
}

impl ValueAssessment {
    /// Compute the weighted overall score and verdict from present
    /// dimensions. Missing dimensions are excluded rather than scored as
    /// zero; weights renormalize over what is present.
    pub fn from_dimensions(dimension_scores: BTreeMap<DimensionKind, f64>) -> Self {
        let weight_sum: f64 = dimension_scores.keys().map(|d| d.weight()).sum();
        let overall_score = if weight_sum > 0.0 {
            dimension_scores
                .iter()
                .map(|(dim, score)| dim.weight() * score)
                .sum::<f64>()
                / weight_sum
        } else {
            0.0
        };
        Self {
            dimension_scores,
            overall_score,
            approval: ApprovalStatus::from_score(overall_score),
        }
    }
}
