//! The creation orchestrator
//!
//! Sequences one creation request end to end:
//! validate → duplicate check → recommend → execute → assemble → assess.
//! An update-advised duplicate exits early unless the caller forces
//! creation. Only input errors and total capability failure are hard
//! errors; degraded infrastructure and individual capability failures are
//! absorbed into the response.

use crate::executor::{ExecutionConfig, ExecutionEngine};
use arbor_assess::ValueAssessor;
use arbor_dedup::{CorpusSnapshot, DuplicateDetector};
use arbor_recommend::Recommender;
use arbor_registry::CapabilityRegistry;
use arbor_types::{
    CapabilityOutput, ContentItem, ContentSubmission, CreateError, CreateOptions, CreateOutcome,
    CreateResult, DecisionMetadata, DecisionMode, DuplicateAdvice, Recommendation,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Entry point for content creation.
pub struct CreationOrchestrator {
    engine: ExecutionEngine,
    detector: DuplicateDetector,
    recommender: Recommender,
    assessor: ValueAssessor,
}

impl CreationOrchestrator {
    pub fn new(registry: Arc<CapabilityRegistry>, recommender: Recommender) -> Self {
        Self::with_config(registry, recommender, ExecutionConfig::default())
    }

    pub fn with_config(
        registry: Arc<CapabilityRegistry>,
        recommender: Recommender,
        config: ExecutionConfig,
    ) -> Self {
        Self {
            engine: ExecutionEngine::with_config(registry, config),
            detector: DuplicateDetector::new(),
            recommender,
            assessor: ValueAssessor::new(),
        }
    }

    /// Process one submission against a corpus snapshot.
    ///
    /// The snapshot is injected per call; cross-request races on the same
    /// content are the owning catalogue's concern, not a locking problem
    /// here.
    pub async fn create(
        &self,
        submission: ContentSubmission,
        options: CreateOptions,
        corpus: &CorpusSnapshot,
    ) -> CreateResult<CreateOutcome> {
        let started = Instant::now();

        submission.validate()?;

        // ── Duplicate check ──────────────────────────────────────────
        let duplicate_report = self.detector.detect(corpus, &submission);
        if !options.force {
            if let Some(DuplicateAdvice::Update) = duplicate_report.advice() {
                info!(
                    candidates = duplicate_report.candidates.len(),
                    "Creation blocked by update-advised duplicate"
                );
                return Ok(CreateOutcome::DuplicateDetected {
                    candidates: duplicate_report.candidates,
                    advice: DuplicateAdvice::Update,
                });
            }
        }

        // ── Decide the capability set ────────────────────────────────
        let (capabilities, recommendation) = self.resolve_capabilities(&submission, &options)?;
        debug!(
            mode = ?options.mode,
            capabilities = capabilities.len(),
            confidence = recommendation.confidence,
            "Capability set resolved"
        );

        // ── Execute ──────────────────────────────────────────────────
        let report = self
            .engine
            .execute(&submission, &capabilities, options.deadline)
            .await;
        if !report.any_completed() {
            warn!("No capability produced usable output");
            return Err(CreateError::AllCapabilitiesFailed);
        }

        // ── Assemble and assess ──────────────────────────────────────
        let mut item = ContentItem::from_submission(&submission);
        for outcome in report.outcomes.values() {
            match &outcome.output {
                Some(CapabilityOutput::Tags { tags }) => item.tags = tags.clone(),
                Some(CapabilityOutput::Faqs { faqs }) => item.faqs = faqs.clone(),
                Some(CapabilityOutput::Summary { text }) => item.summary = Some(text.clone()),
                None => {}
            }
        }
        let value_assessment = self.assessor.assess(&item);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            item_id = %item.id,
            approval = ?value_assessment.approval,
            elapsed_ms,
            "Creation completed"
        );

        Ok(CreateOutcome::Created {
            item,
            capability_results: report.outcomes,
            value_assessment,
            decision_metadata: DecisionMetadata {
                decision_mode: options.mode,
                rationale: recommendation.rationale,
                confidence: recommendation.confidence,
                duplicate_check_degraded: duplicate_report.degraded,
                deadline_exceeded: report.deadline_exceeded,
                elapsed_ms,
            },
        })
    }

    /// Apply the decision mode to the recommendation and any caller set.
    fn resolve_capabilities(
        &self,
        submission: &ContentSubmission,
        options: &CreateOptions,
    ) -> CreateResult<(BTreeSet<arbor_types::CapabilityKind>, Recommendation)> {
        match options.mode {
            DecisionMode::Automatic => {
                let rec = self.recommender.recommend(submission);
                Ok((rec.capabilities.clone(), rec))
            }
            DecisionMode::Assisted => {
                let rec = self.recommender.recommend(submission);
                match &options.requested_capabilities {
                    Some(set) if !set.is_empty() => Ok((set.clone(), rec)),
                    _ => Ok((rec.capabilities.clone(), rec)),
                }
            }
            DecisionMode::Manual => match &options.requested_capabilities {
                Some(set) if !set.is_empty() => {
                    let rec = Recommendation::new(set.clone(), 1.0, "caller_specified");
                    Ok((set.clone(), rec))
                }
                _ => Err(CreateError::EmptyCapabilitySet),
            },
        }
    }
}
