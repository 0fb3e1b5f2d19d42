//! Caller options for a creation request

use crate::capability::CapabilityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// How much control the caller takes over which capabilities run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// Use the recommendation engine's output verbatim
    Automatic,
    /// Use the caller's override set when given, the recommendation otherwise
    #[default]
    Assisted,
    /// Ignore the recommendation; the caller must supply an explicit set
    Manual,
}

/// Options carried by one `create` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateOptions {
    pub mode: DecisionMode,
    /// Explicit capability set; required in manual mode, optional override
    /// in assisted mode, ignored in automatic mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_capabilities: Option<BTreeSet<CapabilityKind>>,
    /// Create even when an update-advised duplicate exists
    #[serde(default)]
    pub force: bool,
    /// Overall deadline; when it expires the orchestrator stops waiting and
    /// returns partial results marked accordingly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Duration>,
}

impl CreateOptions {
    pub fn automatic() -> Self {
        Self {
            mode: DecisionMode::Automatic,
            ..Self::default()
        }
    }

    pub fn manual(capabilities: BTreeSet<CapabilityKind>) -> Self {
        Self {
            mode: DecisionMode::Manual,
            requested_capabilities: Some(capabilities),
            ..Self::default()
        }
    }

    pub fn with_override(mut self, capabilities: BTreeSet<CapabilityKind>) -> Self {
        self.requested_capabilities = Some(capabilities);
        self
    }

    pub fn with_force(mut self) -> Self {
        self.force = true;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
