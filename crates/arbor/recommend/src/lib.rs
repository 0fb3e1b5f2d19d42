//! Capability recommendation from historical usage patterns
//!
//! Given a submission, the recommender extracts cheap structural features
//! and matches them against an injected, read-only set of
//! [`RecommendationPattern`]s aggregated from past creation outcomes.
//! Sparse history lowers confidence rather than changing the answer, and
//! with no matching pattern at all the engine falls back to per-type
//! defaults at a fixed low confidence.

#![deny(unsafe_code)]

pub mod defaults;
pub mod features;
pub mod recommender;
pub mod store;

pub use features::ContentFeatures;
pub use recommender::Recommender;
pub use store::PatternStore;
