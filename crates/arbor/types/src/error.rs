//! Error taxonomy for the creation pipeline
//!
//! Only input errors and the total absence of any usable capability result
//! escalate to a hard failure of `create`. Infrastructure degradation and
//! individual capability failures are absorbed into the response instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard failures of a `create` call.
#[derive(Debug, Error)]
pub enum CreateError {
    /// A required input field is absent; the engine never guesses one.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The declared item type is not in the known set.
    #[error("unknown item type: {0}")]
    InvalidItemType(String),

    /// Manual mode was requested without an explicit capability set.
    #[error("manual mode requires an explicit, non-empty capability set")]
    EmptyCapabilitySet,

    /// Every requested capability failed and no fallback produced output.
    #[error("all requested capabilities failed with no usable output")]
    AllCapabilitiesFailed,
}

impl CreateError {
    /// Stable machine-readable discriminant for the wire form.
    pub fn error_type(&self) -> &'static str {
        match self {
            CreateError::MissingField(_) => "missing_field",
            CreateError::InvalidItemType(_) => "invalid_item_type",
            CreateError::EmptyCapabilitySet => "empty_capability_set",
            CreateError::AllCapabilitiesFailed => "all_capabilities_failed",
        }
    }

    /// Serializable body for returning the error across the boundary.
    pub fn to_body(&self) -> ErrorBody {
        let missing_fields = match self {
            CreateError::MissingField(field) => Some(vec![(*field).to_string()]),
            CreateError::EmptyCapabilitySet => Some(vec!["requested_capabilities".to_string()]),
            _ => None,
        };
        ErrorBody {
            status: "error".to_string(),
            error_type: self.error_type().to_string(),
            missing_fields,
            message: self.to_string(),
        }
    }
}

/// Wire form of a hard failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    pub message: String,
}

/// Result type for creation operations.
pub type CreateResult<T> = Result<T, CreateError>;
