//! Content submissions and finished content items
//!
//! A [`ContentSubmission`] is the raw inbound payload. It is immutable once
//! it enters the pipeline and is owned exclusively by the request carrying
//! it. A [`ContentItem`] is the assembled, enriched output handed back to
//! the catalogue layer.

use crate::capability::{ContentTag, FaqPair};
use crate::error::CreateError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ── Item Identifier ──────────────────────────────────────────────────

/// Unique identifier for a content item, assigned when the item is assembled
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn generate() -> Self {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("item_{}", &hex[..8]))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Item Type ────────────────────────────────────────────────────────

/// The declared type of a knowledge item.
///
/// Closed set: the inbound boundary parses the caller's string and refuses
/// anything outside it rather than guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Policy documents: rules and entitlements
    Policy,
    /// Procedure guides: step-by-step operational flows
    Procedure,
    /// Curated question/answer collections
    Faq,
    /// Training material
    Training,
    /// Generic notes
    Note,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Policy,
        ItemType::Procedure,
        ItemType::Faq,
        ItemType::Training,
        ItemType::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Policy => "policy",
            ItemType::Procedure => "procedure",
            ItemType::Faq => "faq",
            ItemType::Training => "training",
            ItemType::Note => "note",
        }
    }

    /// Fixed base value of this item type for value assessment.
    ///
    /// Policy and procedure content carries more business weight than a
    /// generic note. Part of the assessment contract.
    pub fn base_value(&self) -> f64 {
        match self {
            ItemType::Policy => 0.9,
            ItemType::Procedure => 0.85,
            ItemType::Training => 0.8,
            ItemType::Faq => 0.7,
            ItemType::Note => 0.6,
        }
    }
}

impl FromStr for ItemType {
    type Err = CreateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "policy" => Ok(ItemType::Policy),
            "procedure" => Ok(ItemType::Procedure),
            "faq" => Ok(ItemType::Faq),
            "training" => Ok(ItemType::Training),
            "note" => Ok(ItemType::Note),
            other => Err(CreateError::InvalidItemType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Submission ───────────────────────────────────────────────────────

/// Raw content submitted for creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentSubmission {
    pub title: String,
    pub body: String,
    pub declared_type: ItemType,
}

impl ContentSubmission {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        declared_type: ItemType,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            declared_type,
        }
    }

    /// Validate required fields. Surfaced immediately; no partial
    /// processing is attempted on an invalid submission.
    pub fn validate(&self) -> Result<(), CreateError> {
        if self.title.trim().is_empty() {
            return Err(CreateError::MissingField("title"));
        }
        if self.body.trim().is_empty() {
            return Err(CreateError::MissingField("body"));
        }
        Ok(())
    }
}

// ── Content Item ─────────────────────────────────────────────────────

/// A finished, versioned content item assembled from a submission and the
/// outputs of whichever capabilities completed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub body: String,
    pub item_type: ItemType,
    /// Extracted tags, empty when tag extraction did not run or failed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ContentTag>,
    /// Generated FAQ pairs, empty when generation did not run or failed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<FaqPair>,
    /// Generated summary, absent when summarization did not run or failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub version: String,
}

impl ContentItem {
    /// Assemble a bare item from a submission, before enrichment outputs
    /// are attached.
    pub fn from_submission(submission: &ContentSubmission) -> Self {
        Self {
            id: ItemId::generate(),
            title: submission.title.clone(),
            body: submission.body.clone(),
            item_type: submission.declared_type,
            tags: Vec::new(),
            faqs: Vec::new(),
            summary: None,
            created_at: Utc::now(),
            version: "1.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_parses_case_insensitively() {
        assert_eq!("Policy".parse::<ItemType>().unwrap(), ItemType::Policy);
        assert_eq!(" faq ".parse::<ItemType>().unwrap(), ItemType::Faq);
    }

    #[test]
    fn unknown_item_type_is_rejected() {
        let err = "blog_post".parse::<ItemType>().unwrap_err();
        assert!(matches!(err, CreateError::InvalidItemType(ref s) if s == "blog_post"));
    }

    #[test]
    fn validation_requires_title_and_body() {
        let missing_title = ContentSubmission::new("  ", "body", ItemType::Note);
        assert!(matches!(
            missing_title.validate(),
            Err(CreateError::MissingField("title"))
        ));

        let missing_body = ContentSubmission::new("title", "", ItemType::Note);
        assert!(matches!(
            missing_body.validate(),
            Err(CreateError::MissingField("body"))
        ));

        let ok = ContentSubmission::new("title", "body", ItemType::Note);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn base_values_rank_policy_above_note() {
        assert!(ItemType::Policy.base_value() > ItemType::Note.base_value());
    }

    #[test]
    fn item_ids_carry_prefix() {
        let id = ItemId::generate();
        assert!(id.0.starts_with("item_"));
        assert_eq!(id.0.len(), "item_".len() + 8);
    }
}
