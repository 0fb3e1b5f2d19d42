//! Recommendation patterns and results
//!
//! Patterns are read-mostly reference data produced by offline aggregation
//! of past creation outcomes. The engine consumes them as an injected
//! read-only snapshot, never as mutable process state.

use crate::capability::CapabilityKind;
use crate::content::ItemType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive character-length range a pattern applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// A historical pattern: for content of this type and size, these
/// capabilities satisfied users at this rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPattern {
    pub applicable_type: ItemType,
    pub length_range: LengthRange,
    pub recommended: BTreeSet<CapabilityKind>,
    /// Number of historical outcomes this pattern aggregates
    pub sample_size: u32,
    /// Mean user satisfaction over those outcomes, in [0, 1]
    pub historical_satisfaction: f64,
    /// Confidence recorded by the offline aggregation, in [0, 1]
    pub confidence: f64,
}

/// What the recommendation engine proposes for one submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub capabilities: BTreeSet<CapabilityKind>,
    /// Reported confidence, already capped by sample size, in [0, 1]
    pub confidence: f64,
    pub rationale: String,
}

impl Recommendation {
    pub fn new(
        capabilities: BTreeSet<CapabilityKind>,
        confidence: f64,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            capabilities,
            confidence: confidence.clamp(0.0, 1.0),
            rationale: rationale.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_range_is_inclusive() {
        let range = LengthRange::new(100, 500);
        assert!(range.contains(100));
        assert!(range.contains(500));
        assert!(!range.contains(99));
        assert!(!range.contains(501));
    }

    #[test]
    fn recommendation_confidence_is_clamped() {
        let rec = Recommendation::new(BTreeSet::new(), 1.4, "test");
        assert_eq!(rec.confidence, 1.0);
    }
}
