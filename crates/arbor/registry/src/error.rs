//! Error types for the capability registry

use arbor_types::CapabilityKind;
use thiserror::Error;

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No worker is registered for this capability.
    #[error("capability not registered: {0}")]
    NotRegistered(CapabilityKind),

    /// A worker for this capability is already registered.
    #[error("capability already registered: {0}")]
    AlreadyRegistered(CapabilityKind),

    /// The capability exists but is disabled or failing its health probe.
    #[error("capability unavailable: {0}")]
    Unavailable(CapabilityKind),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by a capability worker's execution.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// A dependency the worker needs is not reachable.
    #[error("capability dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// The worker ran but could not produce output.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
