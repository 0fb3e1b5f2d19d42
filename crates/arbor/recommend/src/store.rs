//! Read-only pattern snapshot

use arbor_types::{
    CapabilityKind, ItemType, LengthRange, RecommendationPattern,
};
use std::collections::BTreeSet;

/// An injected, read-only set of historical patterns.
///
/// Patterns come from offline aggregation of past outcomes; the engine
/// never mutates them during a request. An empty store is valid and puts
/// every request on the cold-start path.
#[derive(Clone, Debug, Default)]
pub struct PatternStore {
    patterns: Vec<RecommendationPattern>,
}

impl PatternStore {
    pub fn new(patterns: Vec<RecommendationPattern>) -> Self {
        Self { patterns }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A small seed set reflecting typical observed usage, for deployments
    /// with no aggregated history yet.
    pub fn seeded() -> Self {
        fn set(kinds: &[CapabilityKind]) -> BTreeSet<CapabilityKind> {
            kinds.iter().copied().collect()
        }
        Self::new(vec![
            RecommendationPattern {
                applicable_type: ItemType::Policy,
                length_range: LengthRange::new(200, 5000),
                recommended: set(&[
                    CapabilityKind::TagExtraction,
                    CapabilityKind::FaqGeneration,
                    CapabilityKind::Summarization,
                ]),
                sample_size: 45,
                historical_satisfaction: 0.82,
                confidence: 0.8,
            },
            RecommendationPattern {
                applicable_type: ItemType::Procedure,
                length_range: LengthRange::new(300, 8000),
                recommended: set(&[
                    CapabilityKind::TagExtraction,
                    CapabilityKind::Summarization,
                ]),
                sample_size: 30,
                historical_satisfaction: 0.78,
                confidence: 0.75,
            },
            RecommendationPattern {
                applicable_type: ItemType::Training,
                length_range: LengthRange::new(500, 20000),
                recommended: set(&[
                    CapabilityKind::TagExtraction,
                    CapabilityKind::FaqGeneration,
                    CapabilityKind::Summarization,
                ]),
                sample_size: 12,
                historical_satisfaction: 0.85,
                confidence: 0.7,
            },
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// All patterns applicable to a type and content length.
    pub fn matching(
        &self,
        item_type: ItemType,
        char_count: usize,
    ) -> impl Iterator<Item = &RecommendationPattern> {
        self.patterns.iter().filter(move |p| {
            p.applicable_type == item_type && p.length_range.contains(char_count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_filters_by_type_and_length() {
        let store = PatternStore::seeded();
        let hits: Vec<_> = store.matching(ItemType::Policy, 1000).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].applicable_type, ItemType::Policy);

        assert_eq!(store.matching(ItemType::Policy, 100).count(), 0);
        assert_eq!(store.matching(ItemType::Note, 1000).count(), 0);
    }
}
