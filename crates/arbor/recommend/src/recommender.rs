//! Pattern selection and confidence capping

use crate::defaults;
use crate::features::ContentFeatures;
use crate::store::PatternStore;
use arbor_types::{ContentSubmission, Recommendation, RecommendationPattern};
use tracing::debug;

/// Maximum confidence a pattern can report given how many outcomes back it.
///
/// Sparse history caps confidence instead of changing the recommendation;
/// the cap is monotone in sample size.
pub fn sample_cap(sample_size: u32) -> f64 {
    match sample_size {
        0..=19 => 0.5,
        20..=49 => 0.7,
        50..=99 => 0.85,
        _ => 1.0,
    }
}

/// Recommends a capability set for a submission from historical patterns.
#[derive(Clone, Debug)]
pub struct Recommender {
    store: PatternStore,
}

impl Recommender {
    pub fn new(store: PatternStore) -> Self {
        Self { store }
    }

    /// Produce a recommendation. Infallible: with no applicable pattern
    /// the per-type cold-start default is returned.
    pub fn recommend(&self, submission: &ContentSubmission) -> Recommendation {
        let features = ContentFeatures::extract(submission);

        let best = self
            .store
            .matching(features.item_type, features.char_count)
            .max_by(|a, b| {
                a.sample_size.cmp(&b.sample_size).then(
                    a.historical_satisfaction
                        .total_cmp(&b.historical_satisfaction),
                )
            });

        match best {
            Some(pattern) => self.from_pattern(pattern),
            None => {
                debug!(
                    item_type = %features.item_type,
                    char_count = features.char_count,
                    "No applicable pattern, using cold-start defaults"
                );
                defaults::cold_start(features.item_type)
            }
        }
    }

    fn from_pattern(&self, pattern: &RecommendationPattern) -> Recommendation {
        let confidence = pattern.confidence.min(sample_cap(pattern.sample_size));
        debug!(
            item_type = %pattern.applicable_type,
            sample_size = pattern.sample_size,
            confidence,
            "Matched historical pattern"
        );
        Recommendation::new(
            pattern.recommended.clone(),
            confidence,
            format!(
                "historical_pattern(samples={}, satisfaction={:.2})",
                pattern.sample_size, pattern.historical_satisfaction
            ),
        )
    }
}
