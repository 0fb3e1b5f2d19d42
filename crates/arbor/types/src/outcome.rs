//! The orchestrator's terminal output bundles

use crate::assess::ValueAssessment;
use crate::capability::{CapabilityKind, CapabilityOutcome};
use crate::content::ContentItem;
use crate::dedup::{DuplicateAdvice, DuplicateCandidate};
use crate::options::DecisionMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata describing how the decision was made and how processing went.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionMetadata {
    pub decision_mode: DecisionMode,
    /// Rationale reported by the recommendation engine
    pub rationale: String,
    /// Recommendation confidence, in [0, 1]
    pub confidence: f64,
    /// True when duplicate detection ran in exact-match-only mode
    pub duplicate_check_degraded: bool,
    /// True when the caller deadline expired before every capability finished
    pub deadline_exceeded: bool,
    /// Total wall-clock time for the request
    pub elapsed_ms: u64,
}

/// Terminal result of a `create` call that did not hard-fail.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CreateOutcome {
    /// The item was assembled, enriched, and assessed
    Created {
        item: ContentItem,
        capability_results: HashMap<CapabilityKind, CapabilityOutcome>,
        value_assessment: ValueAssessment,
        decision_metadata: DecisionMetadata,
    },
    /// Creation was blocked by a near-duplicate advising an update
    DuplicateDetected {
        candidates: Vec<DuplicateCandidate>,
        #[serde(rename = "recommendation")]
        advice: DuplicateAdvice,
    },
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created { .. })
    }
}
