//! Per-dimension scoring functions
//!
//! All scores land in [0, 1]. The functions are pure and take only the
//! outputs they score plus the source body where relevance matters.

use arbor_types::{ContentTag, FaqPair};
use std::collections::HashSet;

/// Question stems a useful FAQ set should cover.
const QUESTION_STEMS: [&str; 5] = ["what", "how", "when", "who", "why"];

/// Words that flag a sentence as carrying an obligation or entitlement.
const OBLIGATION_WORDS: [&str; 6] = ["must", "shall", "required", "should", "may not", "entitled"];

/// Mean business weight of the extracted tags' categories.
///
/// Process and policy tags are worth more than generic descriptions;
/// an empty tag list scores zero.
pub fn tag_value(tags: &[ContentTag]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let sum: f64 = tags
        .iter()
        .map(|tag| tag.category.business_weight())
        .sum();
    sum / tags.len() as f64
}

/// FAQ utility: 0.4 average confidence, 0.4 stem coverage, 0.2 question
/// quality.
pub fn faq_utility(faqs: &[FaqPair]) -> f64 {
    if faqs.is_empty() {
        return 0.0;
    }

    let avg_confidence: f64 =
        faqs.iter().map(|f| f.confidence).sum::<f64>() / faqs.len() as f64;

    let covered = QUESTION_STEMS
        .iter()
        .filter(|stem| {
            faqs.iter()
                .any(|f| f.question.to_lowercase().starts_with(**stem))
        })
        .count();
    let coverage = covered as f64 / QUESTION_STEMS.len() as f64;

    let quality: f64 = faqs.iter().map(|f| question_quality(&f.question)).sum::<f64>()
        / faqs.len() as f64;

    0.4 * avg_confidence + 0.4 * coverage + 0.2 * quality
}

/// One question's quality: a reasonable length window, a terminal question
/// mark, and an interrogative stem each count a third.
fn question_quality(question: &str) -> f64 {
    let mut score = 0.0;
    let len = question.chars().count();
    if (10..=120).contains(&len) {
        score += 1.0 / 3.0;
    }
    if question.trim_end().ends_with('?') {
        score += 1.0 / 3.0;
    }
    let lower = question.to_lowercase();
    if QUESTION_STEMS.iter().any(|stem| lower.starts_with(stem)) {
        score += 1.0 / 3.0;
    }
    score
}

/// Summary completeness: 0.3 length ratio, 0.4 word overlap with the
/// source, 0.3 key-point coverage.
pub fn summary_completeness(summary: &str, body: &str) -> f64 {
    if summary.trim().is_empty() || body.trim().is_empty() {
        return 0.0;
    }

    // A summary around a tenth of the source scores full marks on length.
    let ratio = summary.chars().count() as f64 / body.chars().count() as f64;
    let length_score = (ratio * 10.0).min(1.0);

    let summary_words = word_set(summary);
    let body_words = word_set(body);
    let overlap_score = if summary_words.is_empty() {
        0.0
    } else {
        summary_words.intersection(&body_words).count() as f64 / summary_words.len() as f64
    };

    let key_points: Vec<&str> = body
        .split(['.', '!', '?', '\n', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty() && is_key_point(s))
        .collect();
    let key_point_score = if key_points.is_empty() {
        // Nothing in the source reads as a key point; the summary cannot
        // miss what is not there.
        1.0
    } else {
        let summary_lower = summary.to_lowercase();
        let covered = key_points
            .iter()
            .filter(|point| {
                let point_words = word_set(point);
                if point_words.is_empty() {
                    return false;
                }
                let hits = point_words
                    .iter()
                    .filter(|w| summary_lower.contains(w.as_str()))
                    .count();
                hits * 2 >= point_words.len()
            })
            .count();
        covered as f64 / key_points.len() as f64
    };

    0.3 * length_score + 0.4 * overlap_score + 0.3 * key_point_score
}

/// Sentences carrying digits or obligation keywords are key points.
fn is_key_point(sentence: &str) -> bool {
    if sentence.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    let lower = sentence.to_lowercase();
    OBLIGATION_WORDS.iter().any(|word| lower.contains(word))
}

fn word_set(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 2)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_types::TagCategory;

    #[test]
    fn tag_value_is_mean_category_weight() {
        let tags = vec![
            ContentTag::new("onboarding", TagCategory::Process, 0.9),
            ContentTag::new("misc", TagCategory::Other, 0.6),
        ];
        let expected = (0.9 + 0.5) / 2.0;
        assert!((tag_value(&tags) - expected).abs() < 1e-9);
        assert_eq!(tag_value(&[]), 0.0);
    }

    #[test]
    fn faq_utility_rewards_stem_coverage() {
        let narrow = vec![FaqPair::new("What is the leave policy?", "Five days.", 0.8)];
        let broad = vec![
            FaqPair::new("What is the leave policy?", "Five days.", 0.8),
            FaqPair::new("How do I request leave?", "Via the portal.", 0.8),
            FaqPair::new("When does leave expire?", "At year end.", 0.8),
        ];
        assert!(faq_utility(&broad) > faq_utility(&narrow));
        assert_eq!(faq_utility(&[]), 0.0);
    }

    #[test]
    fn malformed_questions_score_lower() {
        let clean = vec![FaqPair::new("How do I request leave?", "Portal.", 0.8)];
        let malformed = vec![FaqPair::new("leave", "Portal.", 0.8)];
        assert!(faq_utility(&clean) > faq_utility(&malformed));
    }

    #[test]
    fn summary_overlapping_the_source_scores_high() {
        let body = "Employees must submit leave requests five days in advance. \
                    Managers approve requests within two business days. \
                    Unused leave expires at the end of the calendar year.";
        let good = "Employees must submit leave requests five days in advance; \
                    unused leave expires at the end of the calendar year.";
        let unrelated = "Server racks run cooler below the raised floor.";
        assert!(summary_completeness(good, body) > summary_completeness(unrelated, body));
    }

    #[test]
    fn empty_summary_scores_zero() {
        assert_eq!(summary_completeness("", "Some body text."), 0.0);
        assert_eq!(summary_completeness("   ", "Some body text."), 0.0);
    }
}
