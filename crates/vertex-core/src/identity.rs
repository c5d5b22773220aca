//! # Tenant Identity
//!
//! The engine never stores tenants. Callers hand it a [`TenantProfile`]
//! fetched from their own store; the profile's labels are free text and are
//! resolved leniently downstream.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::VertexError;

/// Unique identifier for a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub Uuid);

impl TenantId {
    /// Generate a new random tenant identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tenant:{}", self.0)
    }
}

impl FromStr for TenantId {
    type Err = VertexError;

    /// Accepts a bare UUID or the `tenant:<uuid>` display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("tenant:").unwrap_or(s);
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|e| VertexError::InvalidTenantId {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// The slice of a tenant record the engine consumes.
///
/// `vertical` and `tier` are kept as raw labels: they come from
/// user-editable profile data and may be empty, misspelled, or legacy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantProfile {
    /// The tenant this profile belongs to.
    pub tenant_id: TenantId,
    /// Raw vertical label. Resolved fail-open.
    #[serde(default)]
    pub vertical: String,
    /// Raw tier label from either taxonomy. Resolved fail-closed.
    #[serde(default)]
    pub tier: String,
}

impl TenantProfile {
    /// Build a profile from raw labels.
    pub fn new(tenant_id: TenantId, vertical: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            tenant_id,
            vertical: vertical.into(),
            tier: tier.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_display_roundtrip() {
        let id = TenantId::new();
        let parsed: TenantId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        let bare: TenantId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, bare);
    }

    #[test]
    fn test_tenant_id_rejects_garbage() {
        let err = "tenant:not-a-uuid".parse::<TenantId>().unwrap_err();
        assert!(matches!(err, VertexError::InvalidTenantId { .. }));
    }

    #[test]
    fn test_profile_missing_labels_default_to_empty() {
        let id = TenantId::new();
        let json = serde_json::json!({ "tenantId": id.as_uuid().to_string() });
        let profile: TenantProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.tenant_id, id);
        assert!(profile.vertical.is_empty());
        assert!(profile.tier.is_empty());
    }
}
