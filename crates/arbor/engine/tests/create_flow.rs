//! End-to-end creation flow against the built-in workers

use arbor_dedup::{CorpusSnapshot, IndexedItem};
use arbor_engine::CreationOrchestrator;
use arbor_recommend::{PatternStore, Recommender};
use arbor_registry::standard_registry;
use arbor_types::{
    ApprovalStatus, CapabilityKind, ContentSubmission, CreateError, CreateOptions, CreateOutcome,
    DecisionMode, DuplicateAdvice, ItemId, ItemType,
};
use std::collections::BTreeSet;
use std::sync::Arc;

fn orchestrator() -> CreationOrchestrator {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let registry = Arc::new(standard_registry(Default::default()));
    CreationOrchestrator::new(registry, Recommender::new(PatternStore::seeded()))
}

fn policy_submission() -> ContentSubmission {
    ContentSubmission::new(
        "Expense reimbursement policy",
        "Employees must submit expense reports within 30 days of the purchase. \
         Receipts are required for any expense above 25 dollars. \
         Managers approve reports within five business days. \
         Reimbursement is paid with the next payroll cycle.",
        ItemType::Policy,
    )
}

#[tokio::test]
async fn identical_content_is_blocked_before_any_capability_runs() {
    let sub = policy_submission();
    // Same content with markup and casing noise; normalization makes the
    // fingerprints collide exactly.
    let noisy_title = format!("# {}", sub.title.to_uppercase());
    let existing = IndexedItem::index(
        ItemId::new("item_existing"),
        sub.declared_type,
        &noisy_title,
        &sub.body,
    );
    let corpus = CorpusSnapshot::from_items(vec![existing]);

    let outcome = orchestrator()
        .create(sub, CreateOptions::automatic(), &corpus)
        .await
        .unwrap();

    // Wire shape of the duplicate block.
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "duplicate_detected");
    assert_eq!(json["recommendation"], "update");
    assert_eq!(json["candidates"][0]["existing_item_id"], "item_existing");
    assert_eq!(json["candidates"][0]["recommendation"], "update");

    let CreateOutcome::DuplicateDetected { candidates, advice } = outcome else {
        panic!("expected a duplicate block");
    };
    assert_eq!(advice, DuplicateAdvice::Update);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].similarity, 1.0);
    assert_eq!(candidates[0].item_id, ItemId::new("item_existing"));
}

#[tokio::test]
async fn manual_mode_with_empty_set_is_an_error_not_an_empty_success() {
    let err = orchestrator()
        .create(
            policy_submission(),
            CreateOptions::manual(BTreeSet::new()),
            &CorpusSnapshot::empty(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, CreateError::EmptyCapabilitySet));
    let body = err.to_body();
    assert_eq!(body.status, "error");
    assert_eq!(body.error_type, "empty_capability_set");
}

#[tokio::test]
async fn novel_policy_flows_through_to_an_assessed_item() {
    let outcome = orchestrator()
        .create(
            policy_submission(),
            CreateOptions::automatic(),
            &CorpusSnapshot::empty(),
        )
        .await
        .unwrap();

    let CreateOutcome::Created {
        item,
        capability_results,
        value_assessment,
        decision_metadata,
    } = outcome
    else {
        panic!("expected creation");
    };

    // The seeded policy pattern recommends the full enrichment set.
    assert_eq!(capability_results.len(), 3);
    assert!(capability_results
        .values()
        .all(|outcome| outcome.is_completed()));

    assert!(!item.tags.is_empty());
    assert!(!item.faqs.is_empty());
    assert!(item.summary.is_some());
    assert_eq!(item.version, "1.0");

    assert!(value_assessment.overall_score > 0.0);
    assert_ne!(value_assessment.approval, ApprovalStatus::Rejected);

    assert_eq!(decision_metadata.decision_mode, DecisionMode::Automatic);
    assert!(!decision_metadata.duplicate_check_degraded);
    assert!(!decision_metadata.deadline_exceeded);
}

#[tokio::test]
async fn manual_mode_runs_exactly_the_requested_capabilities() {
    let requested: BTreeSet<_> = [CapabilityKind::Summarization].into();
    let outcome = orchestrator()
        .create(
            policy_submission(),
            CreateOptions::manual(requested.clone()),
            &CorpusSnapshot::empty(),
        )
        .await
        .unwrap();

    let CreateOutcome::Created {
        item,
        capability_results,
        ..
    } = outcome
    else {
        panic!("expected creation");
    };
    let ran: BTreeSet<_> = capability_results.keys().copied().collect();
    assert_eq!(ran, requested);
    assert!(item.summary.is_some());
    assert!(item.tags.is_empty());
}

#[tokio::test]
async fn created_outcome_serializes_with_a_status_tag() {
    let outcome = orchestrator()
        .create(
            policy_submission(),
            CreateOptions::automatic(),
            &CorpusSnapshot::empty(),
        )
        .await
        .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "created");
    assert!(json["value_assessment"]["overall_score"].is_number());
    assert!(json["decision_metadata"]["elapsed_ms"].is_number());
}
