//! Built-in tag extraction worker

use crate::error::WorkerError;
use crate::worker::CapabilityWorker;
use arbor_types::{
    CapabilityKind, CapabilityOutput, ContentSubmission, ContentTag, ItemType, TagCategory,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

struct LexiconEntry {
    keywords: &'static [&'static str],
    tag: &'static str,
    category: TagCategory,
}

/// Keyword lexicon mapping content signals to categorized tags.
const LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        keywords: &["approve", "approval", "sign-off", "review"],
        tag: "approval",
        category: TagCategory::Process,
    },
    LexiconEntry {
        keywords: &["submit", "application", "request", "workflow"],
        tag: "application",
        category: TagCategory::Process,
    },
    LexiconEntry {
        keywords: &["policy", "entitle", "regulation", "rule"],
        tag: "policy",
        category: TagCategory::Policy,
    },
    LexiconEntry {
        keywords: &["leave", "vacation", "holiday", "absence"],
        tag: "leave",
        category: TagCategory::Policy,
    },
    LexiconEntry {
        keywords: &["must", "required", "mandatory", "compliance"],
        tag: "compliance",
        category: TagCategory::Requirement,
    },
    LexiconEntry {
        keywords: &["deadline", "due date", "within"],
        tag: "deadlines",
        category: TagCategory::Requirement,
    },
    LexiconEntry {
        keywords: &["form", "template", "document", "attachment"],
        tag: "forms",
        category: TagCategory::Material,
    },
    LexiconEntry {
        keywords: &["guide", "how to", "instructions", "steps"],
        tag: "guidance",
        category: TagCategory::Guide,
    },
    LexiconEntry {
        keywords: &["overview", "introduction", "background", "summary"],
        tag: "overview",
        category: TagCategory::Description,
    },
    LexiconEntry {
        keywords: &["training", "onboarding", "course"],
        tag: "training",
        category: TagCategory::Guide,
    },
    LexiconEntry {
        keywords: &["expense", "reimburse", "receipt", "budget"],
        tag: "expenses",
        category: TagCategory::Policy,
    },
];

/// Primary tag extractor: lexicon matching over the lowercased content.
pub struct TagExtractor {
    fallback: Arc<TypeTagFallback>,
}

impl TagExtractor {
    pub fn new() -> Self {
        Self {
            fallback: Arc::new(TypeTagFallback),
        }
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CapabilityWorker for TagExtractor {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::TagExtraction
    }

    async fn execute(
        &self,
        submission: &ContentSubmission,
    ) -> Result<CapabilityOutput, WorkerError> {
        let text = format!("{} {}", submission.title, submission.body).to_lowercase();

        let mut tags = Vec::new();
        for entry in LEXICON {
            let hits: usize = entry
                .keywords
                .iter()
                .map(|kw| text.matches(kw).count())
                .sum();
            if hits > 0 {
                let confidence = 0.6 + 0.1 * (hits.min(3) as f64);
                tags.push(ContentTag::new(entry.tag, entry.category, confidence));
            }
        }

        debug!(tags = tags.len(), "Tag extraction completed");
        Ok(CapabilityOutput::Tags { tags })
    }

    fn fallback(&self) -> Option<Arc<dyn CapabilityWorker>> {
        Some(Arc::clone(&self.fallback) as Arc<dyn CapabilityWorker>)
    }
}

/// Fallback: a single generic tag derived from the declared item type.
struct TypeTagFallback;

#[async_trait]
impl CapabilityWorker for TypeTagFallback {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::TagExtraction
    }

    async fn execute(
        &self,
        submission: &ContentSubmission,
    ) -> Result<CapabilityOutput, WorkerError> {
        let category = match submission.declared_type {
            ItemType::Policy => TagCategory::Policy,
            ItemType::Procedure => TagCategory::Process,
            ItemType::Faq | ItemType::Training => TagCategory::Guide,
            ItemType::Note => TagCategory::Other,
        };
        let tag = ContentTag::new(submission.declared_type.as_str(), category, 0.5);
        Ok(CapabilityOutput::Tags { tags: vec![tag] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(body: &str) -> ContentSubmission {
        ContentSubmission::new("Leave Policy", body, ItemType::Policy)
    }

    #[tokio::test]
    async fn extraction_finds_lexicon_tags() {
        let output = TagExtractor::new()
            .execute(&submission(
                "Employees must submit a leave request for manager approval.",
            ))
            .await
            .unwrap();

        let CapabilityOutput::Tags { tags } = output else {
            panic!("tag extractor must produce tags");
        };
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"leave"));
        assert!(names.contains(&"approval"));
        assert!(names.contains(&"compliance"));
    }

    #[tokio::test]
    async fn repeated_keywords_raise_confidence() {
        let once = TagExtractor::new()
            .execute(&submission("approval needed"))
            .await
            .unwrap();
        let thrice = TagExtractor::new()
            .execute(&submission("approval after approval after approval"))
            .await
            .unwrap();

        let conf = |output: &CapabilityOutput| -> f64 {
            let CapabilityOutput::Tags { tags } = output else {
                panic!("expected tags");
            };
            tags.iter()
                .find(|t| t.name == "approval")
                .map(|t| t.confidence)
                .unwrap()
        };
        assert!(conf(&thrice) > conf(&once));
    }

    #[tokio::test]
    async fn fallback_tags_by_declared_type() {
        let extractor = TagExtractor::new();
        let fallback = extractor.fallback().unwrap();
        let output = fallback
            .execute(&submission("unmatchable content"))
            .await
            .unwrap();

        let CapabilityOutput::Tags { tags } = output else {
            panic!("fallback must produce tags");
        };
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "policy");
        assert_eq!(tags[0].category, TagCategory::Policy);
    }
}
