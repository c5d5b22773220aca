//! # Tenant Resolution
//!
//! Everything the presentation layer needs to render one tenant, derived
//! from its profile in a single call. Recomputed on every request; nothing
//! here is cached by the engine.

use serde::Serialize;
use vertex_access::{FeatureFlags, MenuItem};
use vertex_core::{TenantId, Tier, Vertical};
use vertex_registry::VerticalConfig;

/// Resolved view of one tenant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResolution<'a> {
    pub tenant_id: TenantId,
    /// Canonical vertical after synonym lookup and fallback.
    pub vertical: Vertical,
    /// Canonical tier after normalization.
    pub tier: Tier,
    /// Borrowed from the engine's registry.
    pub config: &'a VerticalConfig,
    pub flags: FeatureFlags,
    pub menu: Vec<MenuItem>,
}
