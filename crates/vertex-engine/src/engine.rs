//! # Engine
//!
//! Owns the vertical registry and the compiled metadata schemas. Feature
//! flags and menus are derived from static tables in `vertex-access` and
//! need no per-engine state.

use std::path::Path;

use serde_json::Value;
use vertex_access::{
    compose_menu, resolve_feature_flags, validate_menus, FeatureFlags, MenuItem, MenuMode,
};
use vertex_core::{normalize_tier, tier_scales_agree, ServiceKey, TenantProfile, Tier, Vertical};
use vertex_registry::{
    resolve_vertical_label, RegistryOverrides, VerticalConfig, VerticalRegistry,
};
use vertex_schema::{MetadataValidator, MetadataViolations, ValidatedMetadata};

use crate::error::EngineError;
use crate::resolution::TenantResolution;

/// Immutable resolution engine.
#[derive(Debug)]
pub struct Engine {
    registry: VerticalRegistry,
    validator: MetadataValidator,
}

impl Engine {
    /// Build an engine over `registry`, running every startup check.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as an [`EngineError`].
    pub fn new(registry: VerticalRegistry) -> Result<Self, EngineError> {
        if !tier_scales_agree() {
            return Err(EngineError::TierScalesDisagree);
        }
        validate_menus()?;
        let validator = MetadataValidator::new(&registry)?;
        tracing::info!(verticals = registry.iter().count(), "vertex engine ready");
        Ok(Self {
            registry,
            validator,
        })
    }

    /// Engine over the compiled-in registry.
    ///
    /// # Errors
    ///
    /// See [`Engine::new`].
    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(VerticalRegistry::builtin())
    }

    /// Engine over the builtin registry patched by `overrides`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Registry`] if the overrides do not apply, or
    /// any error of [`Engine::new`].
    pub fn from_overrides(overrides: &RegistryOverrides) -> Result<Self, EngineError> {
        Self::new(VerticalRegistry::with_overrides(overrides)?)
    }

    /// Engine over the builtin registry, patched by the override file at
    /// `path` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Registry`] if the file cannot be read or
    /// parsed, or any error of [`Engine::from_overrides`].
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        match path {
            Some(path) => {
                let overrides = RegistryOverrides::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    verticals = overrides.verticals.len(),
                    "loaded registry overrides"
                );
                Self::from_overrides(&overrides)
            }
            None => Self::builtin(),
        }
    }

    pub fn registry(&self) -> &VerticalRegistry {
        &self.registry
    }

    /// Canonical vertical for a free-text label (fail-open).
    pub fn resolve_vertical(&self, label: &str) -> Vertical {
        resolve_vertical_label(label)
    }

    /// Configuration for a free-text vertical label (fail-open).
    pub fn resolve_vertical_config(&self, label: &str) -> &VerticalConfig {
        self.registry.resolve(label)
    }

    /// Display term for `key` in the vertical named by `label`.
    pub fn get_vocabulary(&self, label: &str, key: ServiceKey) -> &str {
        self.registry.vocabulary(label, key)
    }

    /// Canonical tier for a free-text label (fail-closed).
    pub fn normalize_tier(&self, label: &str) -> Tier {
        normalize_tier(label)
    }

    /// Feature flags for a free-text tier label.
    pub fn resolve_feature_flags(&self, tier: &str) -> FeatureFlags {
        resolve_feature_flags(normalize_tier(tier))
    }

    /// Navigation menu for free-text vertical and tier labels.
    pub fn build_menu(&self, vertical: &str, tier: &str, mode: MenuMode) -> Vec<MenuItem> {
        compose_menu(resolve_vertical_label(vertical), normalize_tier(tier), mode)
    }

    /// Validate record metadata for the vertical named by `vertical`.
    pub fn validate_metadata(
        &self,
        vertical: &str,
        metadata: &Value,
    ) -> Result<ValidatedMetadata, MetadataViolations> {
        self.validator.validate(vertical, metadata)
    }

    /// Resolve everything the dashboard needs for one tenant.
    pub fn resolve_tenant(&self, profile: &TenantProfile, mode: MenuMode) -> TenantResolution<'_> {
        let vertical = resolve_vertical_label(&profile.vertical);
        let tier = normalize_tier(&profile.tier);
        tracing::debug!(
            tenant = %profile.tenant_id,
            vertical = %vertical,
            tier = %tier,
            "resolved tenant"
        );
        TenantResolution {
            tenant_id: profile.tenant_id,
            vertical,
            tier,
            config: self.registry.get(vertical),
            flags: resolve_feature_flags(tier),
            menu: compose_menu(vertical, tier, mode),
        }
    }

    /// Write-path hook: validate the metadata of a record owned by `profile`
    /// before it is persisted.
    pub fn validate_record_metadata(
        &self,
        profile: &TenantProfile,
        metadata: &Value,
    ) -> Result<ValidatedMetadata, MetadataViolations> {
        let result = self.validator.validate(&profile.vertical, metadata);
        if let Err(violations) = &result {
            tracing::debug!(
                tenant = %profile.tenant_id,
                violations = violations.len(),
                "rejected record metadata"
            );
        }
        result
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::LazyLock;
    use vertex_core::TenantId;

    static ENGINE: LazyLock<Engine> = LazyLock::new(|| Engine::builtin().unwrap());

    proptest! {
        #[test]
        fn resolve_tenant_is_idempotent(vertical in ".{0,16}", tier in ".{0,12}") {
            let profile = TenantProfile::new(TenantId::new(), vertical, tier);
            let first = ENGINE.resolve_tenant(&profile, MenuMode::Locked);
            let second = ENGINE.resolve_tenant(&profile, MenuMode::Locked);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn arbitrary_labels_never_exceed_their_tier(vertical in ".{0,16}", tier in ".{0,12}") {
            let profile = TenantProfile::new(TenantId::new(), vertical, tier.clone());
            let resolution = ENGINE.resolve_tenant(&profile, MenuMode::Omit);
            prop_assert_eq!(resolution.tier, normalize_tier(&tier));
            prop_assert_eq!(resolution.flags, resolve_feature_flags(resolution.tier));
        }
    }
}
