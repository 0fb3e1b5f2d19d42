//! Built-in summarization worker

use super::sentences;
use crate::error::WorkerError;
use crate::worker::CapabilityWorker;
use arbor_types::{CapabilityKind, CapabilityOutput, ContentSubmission};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Target summary length as a fraction of the source body.
const TARGET_RATIO: f64 = 0.15;
const MAX_SENTENCES: usize = 3;

/// Primary summarizer: lead-sentence extraction bounded by a target ratio.
pub struct Summarizer {
    fallback: Arc<TruncatingFallback>,
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            fallback: Arc::new(TruncatingFallback),
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CapabilityWorker for Summarizer {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Summarization
    }

    async fn execute(
        &self,
        submission: &ContentSubmission,
    ) -> Result<CapabilityOutput, WorkerError> {
        let split = sentences(&submission.body);
        if split.is_empty() {
            return Err(WorkerError::ExecutionFailed(
                "no sentences to summarize".into(),
            ));
        }

        let target_len = ((submission.body.len() as f64) * TARGET_RATIO).ceil() as usize;
        let mut summary = String::new();
        for sentence in split.iter().take(MAX_SENTENCES) {
            if !summary.is_empty() {
                if summary.len() >= target_len {
                    break;
                }
                summary.push(' ');
            }
            summary.push_str(sentence);
            summary.push('.');
        }

        debug!(
            source_len = submission.body.len(),
            summary_len = summary.len(),
            "Summarization completed"
        );
        Ok(CapabilityOutput::Summary { text: summary })
    }

    fn fallback(&self) -> Option<Arc<dyn CapabilityWorker>> {
        Some(Arc::clone(&self.fallback) as Arc<dyn CapabilityWorker>)
    }
}

/// Fallback: truncate the body to a fixed prefix.
struct TruncatingFallback;

#[async_trait]
impl CapabilityWorker for TruncatingFallback {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Summarization
    }

    async fn execute(
        &self,
        submission: &ContentSubmission,
    ) -> Result<CapabilityOutput, WorkerError> {
        let mut text: String = submission.body.chars().take(200).collect();
        if submission.body.chars().count() > 200 {
            text.push('…');
        }
        Ok(CapabilityOutput::Summary { text })
    }
}
