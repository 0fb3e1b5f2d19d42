//! The capability worker trait
//!
//! Each enrichment capability is an independent, side-effect-free
//! transformation of the same immutable submission. Workers are swappable
//! behind this trait; a worker may carry a simpler fallback worker that the
//! execution engine tries when the primary fails or times out.

use crate::error::WorkerError;
use arbor_types::{CapabilityKind, CapabilityOutput, ContentSubmission};
use async_trait::async_trait;
use std::sync::Arc;

/// An executable enrichment capability.
#[async_trait]
pub trait CapabilityWorker: Send + Sync {
    /// Which capability this worker implements.
    fn kind(&self) -> CapabilityKind;

    /// Run the capability against an immutable submission.
    async fn execute(&self, submission: &ContentSubmission) -> Result<CapabilityOutput, WorkerError>;

    /// Lightweight precondition probe. The registry caches the result;
    /// workers should keep this cheap.
    async fn check_ready(&self) -> bool {
        true
    }

    /// Simpler secondary implementation tried when this worker fails.
    fn fallback(&self) -> Option<Arc<dyn CapabilityWorker>> {
        None
    }
}
