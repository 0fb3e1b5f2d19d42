//! Bounded-concurrency capability execution

use arbor_registry::CapabilityRegistry;
use arbor_types::{CapabilityKind, CapabilityOutcome, CapabilityOutput, ContentSubmission};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::{timeout, Instant};
use tracing::{debug, warn};

/// Execution pool configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Maximum capabilities running at once for a single request.
    pub max_concurrent: usize,
    /// Per-capability timeout; a timed-out primary is eligible for fallback.
    pub capability_timeout: Duration,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 4,
            capability_timeout: Duration::from_secs(30),
        }
    }
}

/// Aggregated result of one execution round: exactly one terminal outcome
/// per requested capability.
#[derive(Clone, Debug)]
pub struct ExecutionReport {
    pub outcomes: HashMap<CapabilityKind, CapabilityOutcome>,
    /// True when the caller deadline cut off at least one capability.
    pub deadline_exceeded: bool,
}

impl ExecutionReport {
    /// Whether any capability produced usable output.
    pub fn any_completed(&self) -> bool {
        self.outcomes.values().any(CapabilityOutcome::is_completed)
    }
}

/// Runs capabilities concurrently against the registry with fallback and
/// failure isolation.
pub struct ExecutionEngine {
    registry: Arc<CapabilityRegistry>,
    config: ExecutionConfig,
}

impl ExecutionEngine {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self::with_config(registry, ExecutionConfig::default())
    }

    pub fn with_config(registry: Arc<CapabilityRegistry>, config: ExecutionConfig) -> Self {
        Self { registry, config }
    }

    /// Run every requested capability to a terminal state.
    ///
    /// Unavailable capabilities are marked `Skipped` without consuming pool
    /// capacity. A failing or timed-out primary falls back to the
    /// registry's fallback worker when one exists; a failing fallback marks
    /// the capability `Failed`. Siblings are never affected.
    pub async fn execute(
        &self,
        submission: &ContentSubmission,
        capabilities: &BTreeSet<CapabilityKind>,
        deadline: Option<Duration>,
    ) -> ExecutionReport {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent));
        let deadline_at = deadline.map(|d| Instant::now() + d);

        let tasks = capabilities.iter().map(|&kind| {
            let semaphore = Arc::clone(&semaphore);
            let registry = Arc::clone(&self.registry);
            let submission = submission.clone();
            let capability_timeout = self.config.capability_timeout;
            tokio::spawn(async move {
                run_capability(
                    kind,
                    &registry,
                    &submission,
                    &semaphore,
                    capability_timeout,
                    deadline_at,
                )
                .await
            })
        });

        let mut outcomes = HashMap::with_capacity(capabilities.len());
        let mut deadline_exceeded = false;
        for (join_result, &kind) in join_all(tasks).await.into_iter().zip(capabilities.iter()) {
            let task = match join_result {
                Ok(task) => task,
                Err(join_err) => {
                    warn!(capability = %kind, error = %join_err, "Capability task aborted");
                    TaskResult {
                        outcome: CapabilityOutcome::failed(
                            kind,
                            format!("task aborted: {join_err}"),
                            0,
                        ),
                        hit_deadline: false,
                    }
                }
            };
            deadline_exceeded |= task.hit_deadline;
            outcomes.insert(kind, task.outcome);
        }

        ExecutionReport {
            outcomes,
            deadline_exceeded,
        }
    }
}

struct TaskResult {
    outcome: CapabilityOutcome,
    hit_deadline: bool,
}

async fn run_capability(
    kind: CapabilityKind,
    registry: &CapabilityRegistry,
    submission: &ContentSubmission,
    semaphore: &Semaphore,
    capability_timeout: Duration,
    deadline_at: Option<Instant>,
) -> TaskResult {
    // Availability is enforced at the registry boundary; an unavailable
    // capability never takes a pool slot.
    let worker = match registry.worker(kind).await {
        Ok(worker) => worker,
        Err(err) => {
            debug!(capability = %kind, reason = %err, "Capability skipped");
            return TaskResult {
                outcome: CapabilityOutcome::skipped(kind, err.to_string()),
                hit_deadline: false,
            };
        }
    };

    let _permit = match semaphore.acquire().await {
        Ok(permit) => permit,
        Err(_) => {
            return TaskResult {
                outcome: CapabilityOutcome::failed(kind, "execution pool closed", 0),
                hit_deadline: false,
            };
        }
    };

    let started = Instant::now();

    let Some(budget) = time_budget(capability_timeout, deadline_at) else {
        return TaskResult {
            outcome: CapabilityOutcome::failed(kind, "deadline exceeded", 0),
            hit_deadline: true,
        };
    };

    match attempt(&*worker, submission, budget).await {
        Ok(output) => {
            let duration_ms = started.elapsed().as_millis() as u64;
            debug!(capability = %kind, duration_ms, "Capability completed");
            return TaskResult {
                outcome: CapabilityOutcome::completed(kind, output, false, duration_ms),
                hit_deadline: false,
            };
        }
        Err(primary_error) => {
            if past_deadline(deadline_at) {
                warn!(capability = %kind, "Capability cut off by caller deadline");
                return TaskResult {
                    outcome: CapabilityOutcome::failed(
                        kind,
                        "deadline exceeded",
                        started.elapsed().as_millis() as u64,
                    ),
                    hit_deadline: true,
                };
            }
            warn!(capability = %kind, error = %primary_error, "Capability failed, trying fallback");

            let fallback_result = match registry.get_fallback(kind) {
                Some(fallback) => match time_budget(capability_timeout, deadline_at) {
                    Some(budget) => attempt(&*fallback, submission, budget).await,
                    None => Err("deadline exceeded".to_string()),
                },
                None => Err(primary_error.clone()),
            };

            let duration_ms = started.elapsed().as_millis() as u64;
            match fallback_result {
                Ok(output) => {
                    debug!(capability = %kind, duration_ms, "Fallback completed");
                    TaskResult {
                        outcome: CapabilityOutcome::completed(kind, output, true, duration_ms),
                        hit_deadline: false,
                    }
                }
                Err(_) => TaskResult {
                    outcome: CapabilityOutcome::failed(kind, primary_error, duration_ms),
                    hit_deadline: past_deadline(deadline_at),
                },
            }
        }
    }
}

/// One timed attempt against a worker. A timeout reads as a failure so the
/// caller can apply fallback uniformly.
async fn attempt(
    worker: &dyn arbor_registry::CapabilityWorker,
    submission: &ContentSubmission,
    budget: Duration,
) -> Result<CapabilityOutput, String> {
    match timeout(budget, worker.execute(submission)).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(err)) => Err(err.to_string()),
        Err(_) => Err(format!("timed out after {}ms", budget.as_millis())),
    }
}

/// Time left for one attempt: the capability timeout, shortened by the
/// caller deadline. `None` when the deadline has already passed.
fn time_budget(capability_timeout: Duration, deadline_at: Option<Instant>) -> Option<Duration> {
    match deadline_at {
        None => Some(capability_timeout),
        Some(at) => {
            let remaining = at.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                None
            } else {
                Some(capability_timeout.min(remaining))
            }
        }
    }
}

fn past_deadline(deadline_at: Option<Instant>) -> bool {
    deadline_at.is_some_and(|at| Instant::now() >= at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_registry::{CapabilityWorker, WorkerError};
    use arbor_types::{CapabilityStatus, ItemType};
    use async_trait::async_trait;

    struct StubWorker {
        kind: CapabilityKind,
        behavior: Behavior,
        fallback: Option<Arc<dyn CapabilityWorker>>,
    }

    enum Behavior {
        Succeed,
        Fail,
        Hang,
    }

    impl StubWorker {
        fn succeeding(kind: CapabilityKind) -> Arc<Self> {
            Arc::new(Self {
                kind,
                behavior: Behavior::Succeed,
                fallback: None,
            })
        }

        fn failing(kind: CapabilityKind) -> Arc<Self> {
            Arc::new(Self {
                kind,
                behavior: Behavior::Fail,
                fallback: None,
            })
        }

        fn failing_with_fallback(kind: CapabilityKind) -> Arc<Self> {
            Arc::new(Self {
                kind,
                behavior: Behavior::Fail,
                fallback: Some(Self::succeeding(kind) as Arc<dyn CapabilityWorker>),
            })
        }

        fn hanging(kind: CapabilityKind) -> Arc<Self> {
            Arc::new(Self {
                kind,
                behavior: Behavior::Hang,
                fallback: None,
            })
        }
    }

    #[async_trait]
    impl CapabilityWorker for StubWorker {
        fn kind(&self) -> CapabilityKind {
            self.kind
        }

        async fn execute(
            &self,
            _submission: &ContentSubmission,
        ) -> Result<CapabilityOutput, WorkerError> {
            match self.behavior {
                Behavior::Succeed => Ok(CapabilityOutput::Summary {
                    text: "ok".into(),
                }),
                Behavior::Fail => Err(WorkerError::ExecutionFailed("stub failure".into())),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(CapabilityOutput::Summary {
                        text: "never".into(),
                    })
                }
            }
        }

        fn fallback(&self) -> Option<Arc<dyn CapabilityWorker>> {
            self.fallback.clone()
        }
    }

    fn submission() -> ContentSubmission {
        ContentSubmission::new("Title", "Body text.", ItemType::Note)
    }

    fn all_kinds() -> BTreeSet<CapabilityKind> {
        CapabilityKind::ALL.into_iter().collect()
    }

    #[tokio::test]
    async fn one_terminal_outcome_per_requested_capability() {
        let registry = Arc::new(CapabilityRegistry::new());
        registry
            .register(StubWorker::succeeding(CapabilityKind::TagExtraction))
            .unwrap();
        registry
            .register(StubWorker::failing(CapabilityKind::FaqGeneration))
            .unwrap();
        // Summarization left unregistered.

        let engine = ExecutionEngine::new(registry);
        let report = engine.execute(&submission(), &all_kinds(), None).await;

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(
            report.outcomes[&CapabilityKind::TagExtraction].status,
            CapabilityStatus::Completed
        );
        assert_eq!(
            report.outcomes[&CapabilityKind::FaqGeneration].status,
            CapabilityStatus::Failed
        );
        assert_eq!(
            report.outcomes[&CapabilityKind::Summarization].status,
            CapabilityStatus::Skipped
        );
        assert!(!report.deadline_exceeded);
    }

    #[tokio::test]
    async fn failure_is_isolated_from_siblings() {
        let registry = Arc::new(CapabilityRegistry::new());
        registry
            .register(StubWorker::failing(CapabilityKind::TagExtraction))
            .unwrap();
        registry
            .register(StubWorker::succeeding(CapabilityKind::Summarization))
            .unwrap();

        let engine = ExecutionEngine::new(registry);
        let kinds: BTreeSet<_> =
            [CapabilityKind::TagExtraction, CapabilityKind::Summarization].into();
        let report = engine.execute(&submission(), &kinds, None).await;

        assert!(report.outcomes[&CapabilityKind::Summarization].is_completed());
        assert!(!report.outcomes[&CapabilityKind::TagExtraction].is_completed());
    }

    #[tokio::test]
    async fn fallback_runs_on_primary_failure() {
        let registry = Arc::new(CapabilityRegistry::new());
        registry
            .register(StubWorker::failing_with_fallback(
                CapabilityKind::FaqGeneration,
            ))
            .unwrap();

        let engine = ExecutionEngine::new(registry);
        let kinds: BTreeSet<_> = [CapabilityKind::FaqGeneration].into();
        let report = engine.execute(&submission(), &kinds, None).await;

        let outcome = &report.outcomes[&CapabilityKind::FaqGeneration];
        assert!(outcome.is_completed());
        assert!(outcome.fallback_used);
    }

    #[tokio::test]
    async fn timeout_counts_as_failure() {
        let registry = Arc::new(CapabilityRegistry::new());
        registry
            .register(StubWorker::hanging(CapabilityKind::Summarization))
            .unwrap();

        let engine = ExecutionEngine::with_config(
            registry,
            ExecutionConfig {
                max_concurrent: 4,
                capability_timeout: Duration::from_millis(50),
            },
        );
        let kinds: BTreeSet<_> = [CapabilityKind::Summarization].into();
        let report = engine.execute(&submission(), &kinds, None).await;

        let outcome = &report.outcomes[&CapabilityKind::Summarization];
        assert_eq!(outcome.status, CapabilityStatus::Failed);
        assert!(outcome.error.as_deref().unwrap_or("").contains("timed out"));
    }

    #[tokio::test]
    async fn caller_deadline_cuts_off_and_is_flagged() {
        let registry = Arc::new(CapabilityRegistry::new());
        registry
            .register(StubWorker::hanging(CapabilityKind::Summarization))
            .unwrap();
        registry
            .register(StubWorker::succeeding(CapabilityKind::TagExtraction))
            .unwrap();

        let engine = ExecutionEngine::new(registry);
        let kinds: BTreeSet<_> =
            [CapabilityKind::Summarization, CapabilityKind::TagExtraction].into();
        let report = engine
            .execute(&submission(), &kinds, Some(Duration::from_millis(100)))
            .await;

        assert!(report.deadline_exceeded);
        assert!(report.outcomes[&CapabilityKind::TagExtraction].is_completed());
        assert_eq!(
            report.outcomes[&CapabilityKind::Summarization].status,
            CapabilityStatus::Failed
        );
    }
}
