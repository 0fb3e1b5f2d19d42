//! Cold-start defaults
//!
//! Used when no historical pattern applies to a submission. The per-type
//! sets encode the obvious baseline: structured reference content benefits
//! from the full enrichment set, short notes only from tagging.

use arbor_types::{CapabilityKind, ItemType, Recommendation};
use std::collections::BTreeSet;

/// Confidence reported for every cold-start recommendation.
pub const COLD_START_CONFIDENCE: f64 = 0.5;

pub const COLD_START_RATIONALE: &str = "no_historical_pattern";

/// Default capability set for a type with no applicable history.
pub fn default_capabilities(item_type: ItemType) -> BTreeSet<CapabilityKind> {
    let kinds: &[CapabilityKind] = match item_type {
        ItemType::Policy | ItemType::Training => &[
            CapabilityKind::TagExtraction,
            CapabilityKind::FaqGeneration,
            CapabilityKind::Summarization,
        ],
        ItemType::Procedure => &[
            CapabilityKind::TagExtraction,
            CapabilityKind::Summarization,
        ],
        ItemType::Faq => &[
            CapabilityKind::TagExtraction,
            CapabilityKind::FaqGeneration,
        ],
        ItemType::Note => &[CapabilityKind::TagExtraction],
    };
    kinds.iter().copied().collect()
}

/// Build the fixed-confidence cold-start recommendation for a type.
pub fn cold_start(item_type: ItemType) -> Recommendation {
    Recommendation::new(
        default_capabilities(item_type),
        COLD_START_CONFIDENCE,
        COLD_START_RATIONALE,
    )
}
