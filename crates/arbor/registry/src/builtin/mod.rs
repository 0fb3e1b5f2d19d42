//! Built-in capability workers
//!
//! Deterministic heuristic implementations of the three enrichment
//! capabilities, each carrying a simpler fallback. They stand in for
//! external enrichment services but honor the same worker contract, so the
//! rest of the engine never knows the difference.

mod faq;
mod summary;
mod tags;

pub use faq::FaqGenerator;
pub use summary::Summarizer;
pub use tags::TagExtractor;

use crate::registry::{CapabilityRegistry, RegistryConfig};
use std::sync::Arc;

/// A registry pre-populated with the built-in workers.
pub fn standard_registry(config: RegistryConfig) -> CapabilityRegistry {
    let registry = CapabilityRegistry::with_config(config);
    registry
        .register(Arc::new(TagExtractor::new()))
        .expect("empty registry accepts the tag extractor");
    registry
        .register(Arc::new(FaqGenerator::new()))
        .expect("empty registry accepts the faq generator");
    registry
        .register(Arc::new(Summarizer::new()))
        .expect("empty registry accepts the summarizer");
    registry
}

/// Split body text into trimmed, non-empty sentences.
pub(crate) fn sentences(body: &str) -> Vec<&str> {
    body.split(['.', '!', '?', '\n', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
