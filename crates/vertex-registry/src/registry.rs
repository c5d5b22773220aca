//! # Vertical Registry
//!
//! A dense table of [`VerticalConfig`], one slot per canonical vertical,
//! indexed by [`Vertical::index`]. Every constructor checks completeness,
//! so lookups by `Vertical` are total.

use std::sync::LazyLock;

use vertex_core::{ServiceKey, Vertical, VERTICAL_COUNT};

use crate::builtin;
use crate::config::VerticalConfig;
use crate::error::RegistryError;
use crate::overrides::RegistryOverrides;

static BUILTIN: LazyLock<VerticalRegistry> = LazyLock::new(VerticalRegistry::builtin);

/// The process-wide builtin registry.
pub fn builtin_registry() -> &'static VerticalRegistry {
    &BUILTIN
}

/// Fail-open lookup against the builtin registry.
pub fn resolve_vertical_config(label: &str) -> &'static VerticalConfig {
    builtin_registry().resolve(label)
}

/// Vocabulary term from the builtin registry.
pub fn get_vocabulary(label: &str, key: ServiceKey) -> &'static str {
    builtin_registry().vocabulary(label, key)
}

/// Canonical vertical for a free-text label, falling back to
/// [`Vertical::DEFAULT`] when the label is unknown.
///
/// A blank label is an ordinary incomplete profile and logs at debug; an
/// unrecognized one logs a warning.
pub fn resolve_vertical_label(label: &str) -> Vertical {
    if label.trim().is_empty() {
        tracing::debug!(
            fallback = %Vertical::DEFAULT,
            "missing vertical label, using default configuration"
        );
        return Vertical::DEFAULT;
    }
    match Vertical::resolve(label) {
        Some(vertical) => vertical,
        None => {
            tracing::warn!(
                vertical = label,
                fallback = %Vertical::DEFAULT,
                "unrecognized vertical label, using default configuration"
            );
            Vertical::DEFAULT
        }
    }
}

/// Immutable per-vertical configuration table.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalRegistry {
    /// `configs[v.index()]` configures `v`. Always `VERTICAL_COUNT` long.
    configs: Vec<VerticalConfig>,
}

impl VerticalRegistry {
    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self {
            configs: Vertical::all()
                .iter()
                .map(|v| builtin::config_for(*v))
                .collect(),
        }
    }

    /// Build a registry from an explicit list of configurations.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateVertical`] if a vertical appears twice.
    /// - [`RegistryError::MissingVertical`] if a canonical vertical is absent.
    /// - [`RegistryError::EmptyVocabularyTerm`] if any term is blank.
    pub fn from_configs(
        configs: impl IntoIterator<Item = VerticalConfig>,
    ) -> Result<Self, RegistryError> {
        let mut slots: Vec<Option<VerticalConfig>> = vec![None; VERTICAL_COUNT];
        for config in configs {
            let slot = &mut slots[config.vertical.index()];
            if slot.is_some() {
                return Err(RegistryError::DuplicateVertical(config.vertical));
            }
            *slot = Some(config);
        }

        let mut table = Vec::with_capacity(VERTICAL_COUNT);
        for (vertical, slot) in Vertical::all().iter().zip(slots) {
            let config = slot.ok_or(RegistryError::MissingVertical(*vertical))?;
            check_vocabulary(&config)?;
            table.push(config);
        }
        Ok(Self { configs: table })
    }

    /// The builtin table with `overrides` applied.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] found in the override set.
    pub fn with_overrides(overrides: &RegistryOverrides) -> Result<Self, RegistryError> {
        let mut registry = Self::builtin();
        for (vertical, patch) in overrides.resolve_keys()? {
            patch.apply(&mut registry.configs[vertical.index()]);
            check_vocabulary(&registry.configs[vertical.index()])?;
            tracing::info!(vertical = %vertical, "applied vertical override");
        }
        Ok(registry)
    }

    /// Configuration for a canonical vertical.
    pub fn get(&self, vertical: Vertical) -> &VerticalConfig {
        &self.configs[vertical.index()]
    }

    /// Fail-open configuration lookup by label.
    pub fn resolve(&self, label: &str) -> &VerticalConfig {
        self.get(resolve_vertical_label(label))
    }

    /// Display term for `key` in the vertical named by `label`.
    pub fn vocabulary(&self, label: &str, key: ServiceKey) -> &str {
        self.resolve(label).term(key)
    }

    /// All configurations in canonical vertical order.
    pub fn iter(&self) -> impl Iterator<Item = &VerticalConfig> {
        self.configs.iter()
    }
}

impl Default for VerticalRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_vocabulary(config: &VerticalConfig) -> Result<(), RegistryError> {
    match config.vocabulary.blank_keys().first() {
        Some(key) => Err(RegistryError::EmptyVocabularyTerm {
            vertical: config.vertical,
            key: *key,
        }),
        None => Ok(()),
    }
}
