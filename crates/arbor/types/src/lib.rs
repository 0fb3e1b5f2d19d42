//! Domain types for the Arbor content creation engine
//!
//! Every crate in the workspace speaks these types. They are deliberately
//! plain: serde-serializable data with small invariant-preserving helpers,
//! no I/O and no async. The contracts that matter live here too — duplicate
//! similarity thresholds, approval thresholds, and dimension weights are
//! constants of the data model, not tunables of any one component.

#![deny(unsafe_code)]

pub mod assess;
pub mod capability;
pub mod content;
pub mod dedup;
pub mod error;
pub mod options;
pub mod outcome;
pub mod recommend;

pub use assess::{ApprovalStatus, DimensionKind, ValueAssessment};
pub use capability::{
    CapabilityKind, CapabilityOutcome, CapabilityOutput, CapabilityStatus, ContentTag, FaqPair,
    TagCategory,
};
pub use content::{ContentItem, ContentSubmission, ItemId, ItemType};
pub use dedup::{DuplicateAdvice, DuplicateCandidate, DuplicateReport};
pub use error::{CreateError, CreateResult, ErrorBody};
pub use options::{CreateOptions, DecisionMode};
pub use outcome::{CreateOutcome, DecisionMetadata};
pub use recommend::{LengthRange, Recommendation, RecommendationPattern};
