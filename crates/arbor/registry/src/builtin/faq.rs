//! Built-in FAQ generation worker

use super::sentences;
use crate::error::WorkerError;
use crate::worker::CapabilityWorker;
use arbor_types::{CapabilityKind, CapabilityOutput, ContentSubmission, FaqPair};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const HOW_SIGNALS: &[&str] = &["step", "process", "submit", "apply", "request", "procedure"];
const WHEN_SIGNALS: &[&str] = &["day", "week", "month", "year", "deadline", "date", "within"];
const WHO_SIGNALS: &[&str] = &["employee", "manager", "team", "approver", "staff", "department"];
const WHY_SIGNALS: &[&str] = &["because", "so that", "ensure", "purpose", "in order to"];

/// Primary FAQ generator: synthesizes question stems from sentence signals.
pub struct FaqGenerator {
    fallback: Arc<LeadFaqFallback>,
}

impl FaqGenerator {
    pub fn new() -> Self {
        Self {
            fallback: Arc::new(LeadFaqFallback),
        }
    }
}

impl Default for FaqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn first_matching<'a>(sentences: &[&'a str], signals: &[&str]) -> Option<&'a str> {
    sentences.iter().copied().find(|s| {
        let lower = s.to_lowercase();
        signals.iter().any(|sig| lower.contains(sig))
    })
}

#[async_trait]
impl CapabilityWorker for FaqGenerator {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::FaqGeneration
    }

    async fn execute(
        &self,
        submission: &ContentSubmission,
    ) -> Result<CapabilityOutput, WorkerError> {
        let split = sentences(&submission.body);
        let Some(first) = split.first() else {
            return Err(WorkerError::ExecutionFailed(
                "no sentences to generate questions from".into(),
            ));
        };
        let title = submission.title.trim();

        let mut faqs = vec![FaqPair::new(
            format!("What is {title}?"),
            (*first).to_string(),
            0.9,
        )];
        if let Some(s) = first_matching(&split, HOW_SIGNALS) {
            faqs.push(FaqPair::new(
                format!("How does {title} work?"),
                s.to_string(),
                0.75,
            ));
        }
        if let Some(s) = first_matching(&split, WHEN_SIGNALS) {
            faqs.push(FaqPair::new(
                format!("When do the timelines in {title} apply?"),
                s.to_string(),
                0.7,
            ));
        }
        if let Some(s) = first_matching(&split, WHO_SIGNALS) {
            faqs.push(FaqPair::new(
                format!("Who is covered by {title}?"),
                s.to_string(),
                0.7,
            ));
        }
        if let Some(s) = first_matching(&split, WHY_SIGNALS) {
            faqs.push(FaqPair::new(
                format!("Why does {title} exist?"),
                s.to_string(),
                0.6,
            ));
        }

        debug!(faqs = faqs.len(), "FAQ generation completed");
        Ok(CapabilityOutput::Faqs { faqs })
    }

    fn fallback(&self) -> Option<Arc<dyn CapabilityWorker>> {
        Some(Arc::clone(&self.fallback) as Arc<dyn CapabilityWorker>)
    }
}

/// Fallback: a single what-is question answered by the opening of the body.
struct LeadFaqFallback;

#[async_trait]
impl CapabilityWorker for LeadFaqFallback {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::FaqGeneration
    }

    async fn execute(
        &self,
        submission: &ContentSubmission,
    ) -> Result<CapabilityOutput, WorkerError> {
        let answer: String = submission.body.chars().take(200).collect();
        let faq = FaqPair::new(
            format!("What is {}?", submission.title.trim()),
            answer,
            0.5,
        );
        Ok(CapabilityOutput::Faqs { faqs: vec![faq] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_types::ItemType;

    fn submission(body: &str) -> ContentSubmission {
        ContentSubmission::new("Annual Leave", body, ItemType::Policy)
    }

    #[tokio::test]
    async fn generation_covers_multiple_question_stems() {
        let body = "Employees accrue five days of leave per year. \
                    Submit a request through the portal. \
                    Your manager reviews it to ensure coverage.";
        let output = FaqGenerator::new().execute(&submission(body)).await.unwrap();

        let CapabilityOutput::Faqs { faqs } = output else {
            panic!("faq generator must produce faqs");
        };
        let questions: Vec<_> = faqs.iter().map(|f| f.question.as_str()).collect();
        assert!(questions.iter().any(|q| q.starts_with("What")));
        assert!(questions.iter().any(|q| q.starts_with("How")));
        assert!(questions.iter().any(|q| q.starts_with("When")));
        assert!(questions.iter().any(|q| q.starts_with("Who")));
        assert!(questions.iter().any(|q| q.starts_with("Why")));
    }

    #[tokio::test]
    async fn plain_body_still_gets_a_what_question() {
        let output = FaqGenerator::new()
            .execute(&submission("A short statement"))
            .await
            .unwrap();
        let CapabilityOutput::Faqs { faqs } = output else {
            panic!("expected faqs");
        };
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "What is Annual Leave?");
    }

    #[tokio::test]
    async fn fallback_produces_one_pair() {
        let generator = FaqGenerator::new();
        let fallback = generator.fallback().unwrap();
        let output = fallback.execute(&submission("Body text.")).await.unwrap();
        let CapabilityOutput::Faqs { faqs } = output else {
            panic!("expected faqs");
        };
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].confidence, 0.5);
    }
}
