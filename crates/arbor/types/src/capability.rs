//! Capability kinds, outputs, and per-request execution outcomes
//!
//! Capabilities are a closed set of tagged variants. The registry resolves a
//! kind to a worker explicitly; nothing is discovered by reflection.

use serde::{Deserialize, Serialize};

// ── Capability Kind ──────────────────────────────────────────────────

/// The enrichment capabilities this engine knows how to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// Extract categorized content tags
    TagExtraction,
    /// Generate question/answer pairs from the content
    FaqGeneration,
    /// Generate a condensed summary
    Summarization,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 3] = [
        CapabilityKind::TagExtraction,
        CapabilityKind::FaqGeneration,
        CapabilityKind::Summarization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::TagExtraction => "tag_extraction",
            CapabilityKind::FaqGeneration => "faq_generation",
            CapabilityKind::Summarization => "summarization",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Structured Outputs ───────────────────────────────────────────────

/// Business category of an extracted tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Process,
    Policy,
    Requirement,
    Material,
    Guide,
    Description,
    Other,
}

impl TagCategory {
    /// Business weight of a tag in this category, used by the value
    /// assessor's tag dimension.
    pub fn business_weight(&self) -> f64 {
        match self {
            TagCategory::Process => 0.9,
            TagCategory::Policy => 0.9,
            TagCategory::Requirement => 0.85,
            TagCategory::Material => 0.8,
            TagCategory::Guide => 0.75,
            TagCategory::Description => 0.6,
            TagCategory::Other => 0.5,
        }
    }
}

/// A single extracted tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentTag {
    pub name: String,
    pub category: TagCategory,
    /// Extraction confidence in [0, 1]
    pub confidence: f64,
}

impl ContentTag {
    pub fn new(name: impl Into<String>, category: TagCategory, confidence: f64) -> Self {
        Self {
            name: name.into(),
            category,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// A generated question/answer pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqPair {
    pub question: String,
    pub answer: String,
    /// Generation confidence in [0, 1]
    pub confidence: f64,
}

impl FaqPair {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Structured output of one capability execution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapabilityOutput {
    Tags { tags: Vec<ContentTag> },
    Faqs { faqs: Vec<FaqPair> },
    Summary { text: String },
}

// ── Execution Outcome ────────────────────────────────────────────────

/// Terminal status of a capability execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityStatus {
    Completed,
    Failed,
    Skipped,
}

/// The recorded outcome of one capability for one request.
///
/// Created once per capability per request and never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapabilityOutcome {
    pub capability: CapabilityKind,
    pub status: CapabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CapabilityOutput>,
    pub fallback_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl CapabilityOutcome {
    pub fn completed(
        capability: CapabilityKind,
        output: CapabilityOutput,
        fallback_used: bool,
        duration_ms: u64,
    ) -> Self {
        Self {
            capability,
            status: CapabilityStatus::Completed,
            output: Some(output),
            fallback_used,
            error: None,
            duration_ms,
        }
    }

    pub fn failed(capability: CapabilityKind, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            capability,
            status: CapabilityStatus::Failed,
            output: None,
            fallback_used: false,
            error: Some(error.into()),
            duration_ms,
        }
    }

    pub fn skipped(capability: CapabilityKind, reason: impl Into<String>) -> Self {
        Self {
            capability,
            status: CapabilityStatus::Skipped,
            output: None,
            fallback_used: false,
            error: Some(reason.into()),
            duration_ms: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == CapabilityStatus::Completed
    }
}
