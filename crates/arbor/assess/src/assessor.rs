//! Assembling dimension scores into a verdict

use crate::dimensions;
use arbor_types::{ContentItem, DimensionKind, ValueAssessment};
use std::collections::BTreeMap;
use tracing::debug;

/// Scores a finished item across all present dimensions.
///
/// Stateless; one assessor serves any number of items.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueAssessor;

impl ValueAssessor {
    pub fn new() -> Self {
        Self
    }

    /// Assess an item. The type-base dimension is always present;
    /// enrichment dimensions appear only when their output does.
    pub fn assess(&self, item: &ContentItem) -> ValueAssessment {
        let mut scores = BTreeMap::new();

        scores.insert(DimensionKind::TypeBase, item.item_type.base_value());

        if !item.tags.is_empty() {
            scores.insert(DimensionKind::TagValue, dimensions::tag_value(&item.tags));
        }
        if !item.faqs.is_empty() {
            scores.insert(DimensionKind::FaqUtility, dimensions::faq_utility(&item.faqs));
        }
        if let Some(summary) = &item.summary {
            scores.insert(
                DimensionKind::SummaryCompleteness,
                dimensions::summary_completeness(summary, &item.body),
            );
        }

        let assessment = ValueAssessment::from_dimensions(scores);
        debug!(
            item_id = %item.id,
            overall_score = assessment.overall_score,
            approval = ?assessment.approval,
            dimensions = assessment.dimension_scores.len(),
            "Value assessment computed"
        );
        assessment
    }
}
