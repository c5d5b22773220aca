//! # Deployment Overrides
//!
//! A YAML file that patches the builtin table at startup:
//!
//! ```yaml
//! verticals:
//!   garage:                 # canonical id or synonym
//!     vocabulary:
//!       service: Intervention
//!     color_scheme: yellow
//!     modules: [workshop_board]
//! ```
//!
//! Unknown fields, unknown vertical keys, and blank terms are rejected; a
//! bad override file must stop startup rather than half-apply.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vertex_core::{ServiceKey, Vertical};

use crate::config::{ColorScheme, IconPair, ModuleId, VerticalConfig};
use crate::error::RegistryError;

/// Parsed override file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryOverrides {
    /// Patches keyed by vertical label.
    #[serde(default)]
    pub verticals: BTreeMap<String, VerticalOverride>,
}

/// Patch for one vertical. Absent fields keep the builtin value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerticalOverride {
    #[serde(default)]
    pub vocabulary: BTreeMap<ServiceKey, String>,
    pub icons: Option<IconPair>,
    pub color_scheme: Option<ColorScheme>,
    pub neon_glow: Option<String>,
    /// Replaces the module list wholesale.
    pub modules: Option<Vec<ModuleId>>,
}

impl RegistryOverrides {
    /// Parse overrides from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConfigLoad`] if the YAML does not match the
    /// override format.
    pub fn from_yaml_str(content: &str) -> Result<Self, RegistryError> {
        serde_yaml::from_str(content).map_err(|e| RegistryError::ConfigLoad {
            path: "<inline>".to_string(),
            reason: format!("invalid YAML: {e}"),
        })
    }

    /// Read and parse an override file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConfigLoad`] if the file cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::ConfigLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            RegistryError::ConfigLoad { reason, .. } => RegistryError::ConfigLoad {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Resolve every key to a canonical vertical.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownVerticalKey`] for a key that is neither a
    ///   canonical id nor a synonym.
    /// - [`RegistryError::DuplicateVertical`] when two keys name the same
    ///   vertical (e.g. `garage` and `automotive`).
    pub fn resolve_keys(&self) -> Result<Vec<(Vertical, &VerticalOverride)>, RegistryError> {
        let mut resolved: Vec<(Vertical, &VerticalOverride)> = Vec::new();
        for (key, patch) in &self.verticals {
            let vertical = Vertical::resolve(key)
                .ok_or_else(|| RegistryError::UnknownVerticalKey(key.clone()))?;
            if resolved.iter().any(|(v, _)| *v == vertical) {
                return Err(RegistryError::DuplicateVertical(vertical));
            }
            resolved.push((vertical, patch));
        }
        Ok(resolved)
    }

    pub fn is_empty(&self) -> bool {
        self.verticals.is_empty()
    }
}

impl VerticalOverride {
    /// Apply this patch in place.
    pub fn apply(&self, config: &mut VerticalConfig) {
        for (key, term) in &self.vocabulary {
            config.vocabulary.set(*key, term.clone());
        }
        if let Some(icons) = &self.icons {
            config.icons = icons.clone();
        }
        if let Some(scheme) = self.color_scheme {
            config.color_scheme = scheme;
        }
        if let Some(glow) = &self.neon_glow {
            config.neon_glow = glow.clone();
        }
        if let Some(modules) = &self.modules {
            config.available_modules = modules.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VerticalRegistry;
    use std::io::Write;

    const SAMPLE: &str = r#"
verticals:
  garage:
    vocabulary:
      service: Intervention
    color_scheme: yellow
    modules: [workshop_board]
  beauty:
    icons:
      primary: flower
      secondary: sparkles
"#;

    #[test]
    fn test_parse_and_apply() {
        let overrides = RegistryOverrides::from_yaml_str(SAMPLE).unwrap();
        let registry = VerticalRegistry::with_overrides(&overrides).unwrap();

        let auto = registry.get(Vertical::Automotive);
        assert_eq!(auto.term(ServiceKey::Service), "Intervention");
        assert_eq!(auto.term(ServiceKey::Client), "Client");
        assert_eq!(auto.color_scheme, ColorScheme::Yellow);
        assert_eq!(auto.available_modules, vec![ModuleId::WorkshopBoard]);

        assert_eq!(registry.get(Vertical::Beauty).icons.primary, "flower");
        assert_eq!(
            registry.get(Vertical::Legal),
            VerticalRegistry::builtin().get(Vertical::Legal)
        );
    }

    #[test]
    fn test_unknown_vertical_key_rejected() {
        let overrides = RegistryOverrides::from_yaml_str("verticals:\n  bakery: {}\n").unwrap();
        let err = VerticalRegistry::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownVerticalKey(k) if k == "bakery"));
    }

    #[test]
    fn test_synonym_and_canonical_collide() {
        let yaml = "verticals:\n  garage: {}\n  automotive: {}\n";
        let overrides = RegistryOverrides::from_yaml_str(yaml).unwrap();
        let err = VerticalRegistry::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateVertical(Vertical::Automotive)));
    }

    #[test]
    fn test_blank_term_rejected() {
        let yaml = "verticals:\n  legal:\n    vocabulary:\n      staff: \"\"\n";
        let overrides = RegistryOverrides::from_yaml_str(yaml).unwrap();
        let err = VerticalRegistry::with_overrides(&overrides).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::EmptyVocabularyTerm {
                vertical: Vertical::Legal,
                key: ServiceKey::Staff
            }
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "verticals:\n  legal:\n    colour: red\n";
        let err = RegistryOverrides::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, RegistryError::ConfigLoad { .. }));
    }

    #[test]
    fn test_unknown_vocabulary_key_rejected() {
        let yaml = "verticals:\n  legal:\n    vocabulary:\n      lawyer: Maître\n";
        assert!(RegistryOverrides::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let overrides = RegistryOverrides::load(file.path()).unwrap();
        assert_eq!(overrides.verticals.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RegistryOverrides::load(Path::new("/nonexistent/vertex.yaml")).unwrap_err();
        match err {
            RegistryError::ConfigLoad { path, reason } => {
                assert!(path.contains("vertex.yaml"));
                assert!(reason.contains("cannot read file"));
            }
            other => panic!("expected ConfigLoad, got: {other}"),
        }
    }

    #[test]
    fn test_empty_file_is_no_op() {
        let overrides = RegistryOverrides::from_yaml_str("verticals: {}\n").unwrap();
        assert!(overrides.is_empty());
        assert_eq!(
            VerticalRegistry::with_overrides(&overrides).unwrap(),
            VerticalRegistry::builtin()
        );
    }
}
