//! The capability registry
//!
//! DashMap-backed so reads never block across requests. Health is probed on
//! demand and cached for a TTL; cache entries are replaced atomically, never
//! mutated in place.

use crate::error::{RegistryError, RegistryResult};
use crate::worker::CapabilityWorker;
use arbor_types::CapabilityKind;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Registry configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How long a health probe result stays fresh.
    pub health_ttl: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            health_ttl: Duration::from_secs(300),
        }
    }
}

/// Probed health of a capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Available,
    Unavailable,
}

/// Point-in-time view of one registered capability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    pub kind: CapabilityKind,
    pub enabled: bool,
    pub health: HealthState,
    pub has_fallback: bool,
}

struct Registered {
    worker: Arc<dyn CapabilityWorker>,
    enabled: bool,
}

#[derive(Clone, Copy)]
struct CachedHealth {
    state: HealthState,
    checked_at: Instant,
}

/// Registry of capability workers with cached health.
pub struct CapabilityRegistry {
    config: RegistryConfig,
    workers: DashMap<CapabilityKind, Registered>,
    health_cache: DashMap<CapabilityKind, CachedHealth>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            workers: DashMap::new(),
            health_cache: DashMap::new(),
        }
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register a worker for its capability. Registration happens once at
    /// startup; re-registering the same kind is an error.
    pub fn register(&self, worker: Arc<dyn CapabilityWorker>) -> RegistryResult<()> {
        let kind = worker.kind();
        if self.workers.contains_key(&kind) {
            return Err(RegistryError::AlreadyRegistered(kind));
        }
        debug!(capability = %kind, "Capability registered");
        self.workers.insert(
            kind,
            Registered {
                worker,
                enabled: true,
            },
        );
        Ok(())
    }

    /// Enable or disable a capability. A disabled capability is never
    /// returned as available regardless of health.
    pub fn set_enabled(&self, kind: CapabilityKind, enabled: bool) -> RegistryResult<()> {
        let mut entry = self
            .workers
            .get_mut(&kind)
            .ok_or(RegistryError::NotRegistered(kind))?;
        entry.enabled = enabled;
        Ok(())
    }

    // ── Availability ─────────────────────────────────────────────────

    /// Whether a capability may currently be executed.
    pub async fn is_available(&self, kind: CapabilityKind) -> bool {
        let Some(entry) = self.workers.get(&kind) else {
            return false;
        };
        if !entry.enabled {
            return false;
        }
        let worker = Arc::clone(&entry.worker);
        drop(entry);
        self.probe_health(kind, &worker).await == HealthState::Available
    }

    /// Descriptors for every capability that may currently be executed.
    pub async fn list_available(&self) -> Vec<CapabilityDescriptor> {
        let mut available = Vec::new();
        for kind in CapabilityKind::ALL {
            if self.is_available(kind).await {
                if let Ok(descriptor) = self.descriptor(kind).await {
                    available.push(descriptor);
                }
            }
        }
        available
    }

    /// Point-in-time descriptor for a registered capability.
    pub async fn descriptor(&self, kind: CapabilityKind) -> RegistryResult<CapabilityDescriptor> {
        let entry = self
            .workers
            .get(&kind)
            .ok_or(RegistryError::NotRegistered(kind))?;
        let enabled = entry.enabled;
        let has_fallback = entry.worker.fallback().is_some();
        let worker = Arc::clone(&entry.worker);
        drop(entry);

        let health = if enabled {
            self.probe_health(kind, &worker).await
        } else {
            HealthState::Unavailable
        };

        Ok(CapabilityDescriptor {
            kind,
            enabled,
            health,
            has_fallback,
        })
    }

    // ── Worker resolution ────────────────────────────────────────────

    /// Resolve an executable worker. This is the only path to execution:
    /// disabled or unhealthy capabilities are refused here, so callers
    /// never need to re-check availability ad hoc.
    pub async fn worker(&self, kind: CapabilityKind) -> RegistryResult<Arc<dyn CapabilityWorker>> {
        let entry = self
            .workers
            .get(&kind)
            .ok_or(RegistryError::NotRegistered(kind))?;
        if !entry.enabled {
            return Err(RegistryError::Unavailable(kind));
        }
        let worker = Arc::clone(&entry.worker);
        drop(entry);

        match self.probe_health(kind, &worker).await {
            HealthState::Available => Ok(worker),
            HealthState::Unavailable => Err(RegistryError::Unavailable(kind)),
        }
    }

    /// The fallback worker for a capability, when it carries one.
    pub fn get_fallback(&self, kind: CapabilityKind) -> Option<Arc<dyn CapabilityWorker>> {
        self.workers.get(&kind).and_then(|e| e.worker.fallback())
    }

    /// Drop the cached health for a capability, forcing the next check to
    /// probe again.
    pub fn invalidate_health(&self, kind: CapabilityKind) {
        self.health_cache.remove(&kind);
    }

    // ── Internals ────────────────────────────────────────────────────

    async fn probe_health(
        &self,
        kind: CapabilityKind,
        worker: &Arc<dyn CapabilityWorker>,
    ) -> HealthState {
        if let Some(cached) = self.health_cache.get(&kind) {
            if cached.checked_at.elapsed() < self.config.health_ttl {
                return cached.state;
            }
        }

        let state = if worker.check_ready().await {
            HealthState::Available
        } else {
            warn!(capability = %kind, "Capability failed health probe");
            HealthState::Unavailable
        };
        self.health_cache.insert(
            kind,
            CachedHealth {
                state,
                checked_at: Instant::now(),
            },
        );
        state
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
