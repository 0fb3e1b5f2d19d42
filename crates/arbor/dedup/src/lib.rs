//! Content fingerprinting and near-duplicate detection
//!
//! Two layers, cheapest first:
//!
//! 1. An exact-match lookup by [`Fingerprint`] — a blake3 digest of the
//!    normalized content, so formatting-only differences never block
//!    creation.
//! 2. An approximate token-overlap scan against existing items of the same
//!    declared type, bounded by the injected [`CorpusSnapshot`] rather than
//!    a full corpus walk.
//!
//! The detector is read-only and infallible: when the similarity side of
//! the snapshot is unavailable it degrades to exact-match only and reports
//! `degraded: true` instead of failing the request.

#![deny(unsafe_code)]

pub mod detector;
pub mod fingerprint;
pub mod normalize;
pub mod snapshot;

pub use detector::DuplicateDetector;
pub use fingerprint::Fingerprint;
pub use normalize::normalize;
pub use snapshot::{CorpusSnapshot, IndexedItem};
