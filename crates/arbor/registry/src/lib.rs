//! Capability registry for the Arbor engine
//!
//! Capabilities are registered explicitly at startup as workers behind the
//! [`CapabilityWorker`] trait. The registry is the single gate to an
//! executable worker: a capability that is disabled or failing its health
//! probe is never handed out, so callers cannot bypass the availability
//! invariant. Health probes are cached for a short window to avoid
//! re-checking on every request without going stale for long.

#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod registry;
pub mod worker;

pub use builtin::{standard_registry, FaqGenerator, Summarizer, TagExtractor};
pub use error::{RegistryError, RegistryResult, WorkerError};
pub use registry::{CapabilityDescriptor, CapabilityRegistry, HealthState, RegistryConfig};
pub use worker::CapabilityWorker;
