//! Capability execution and creation orchestration
//!
//! The execution engine runs requested capabilities as independent
//! concurrent tasks over a semaphore-bounded pool, with per-capability
//! timeouts, fallback on failure, and strict sibling isolation: one
//! capability failing never disturbs another, and the engine returns only
//! when every requested capability has reached a terminal state.
//!
//! The orchestrator sequences the whole creation pipeline — validate,
//! duplicate-check, recommend, execute, assemble, assess — and applies the
//! caller's decision mode.

#![deny(unsafe_code)]

pub mod executor;
pub mod orchestrator;

pub use executor::{ExecutionConfig, ExecutionEngine, ExecutionReport};
pub use orchestrator::CreationOrchestrator;
