//! # Vertical Configuration Records

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vertex_core::{ServiceKey, Vertical, Vocabulary};

/// Primary/secondary icon identifiers for UI decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconPair {
    pub primary: String,
    pub secondary: String,
}

impl IconPair {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// Theme palette identifiers understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Amber,
    Rose,
    Lime,
    Sky,
    Indigo,
    Emerald,
    Orange,
    Yellow,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amber => "amber",
            Self::Rose => "rose",
            Self::Lime => "lime",
            Self::Sky => "sky",
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opt-in dashboard modules a vertical can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    /// Kitchen display system.
    Kds,
    TableManager,
    MenuEditor,
    LoyaltyCards,
    Gallery,
    ClassScheduler,
    MembershipCards,
    PatientRecords,
    Teleconsultation,
    CaseFiles,
    TimeTracking,
    PropertyListings,
    VisitPlanner,
    WorkshopBoard,
    PartsInventory,
    DispatchMap,
    QuoteBuilder,
}

impl ModuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kds => "kds",
            Self::TableManager => "table_manager",
            Self::MenuEditor => "menu_editor",
            Self::LoyaltyCards => "loyalty_cards",
            Self::Gallery => "gallery",
            Self::ClassScheduler => "class_scheduler",
            Self::MembershipCards => "membership_cards",
            Self::PatientRecords => "patient_records",
            Self::Teleconsultation => "teleconsultation",
            Self::CaseFiles => "case_files",
            Self::TimeTracking => "time_tracking",
            Self::PropertyListings => "property_listings",
            Self::VisitPlanner => "visit_planner",
            Self::WorkshopBoard => "workshop_board",
            Self::PartsInventory => "parts_inventory",
            Self::DispatchMap => "dispatch_map",
            Self::QuoteBuilder => "quote_builder",
        }
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dashboard varies per vertical.
///
/// Consuming code is vertical-agnostic: it reads this record instead of
/// branching on the vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalConfig {
    /// The canonical vertical this record configures.
    pub vertical: Vertical,
    /// Display term for every semantic key.
    pub vocabulary: Vocabulary,
    pub icons: IconPair,
    /// JSON Schema (Draft 2020-12) for the free-form metadata on records of
    /// this vertical. Every property is optional and unknown properties are
    /// allowed.
    pub metadata_schema: Value,
    /// Opt-in modules unlocked for this vertical, in display order.
    pub available_modules: Vec<ModuleId>,
    pub color_scheme: ColorScheme,
    /// Accent color for the glow effect, as a CSS hex string.
    pub neon_glow: String,
}

impl VerticalConfig {
    /// Display term for `key`.
    pub fn term(&self, key: ServiceKey) -> &str {
        self.vocabulary.get(key)
    }

    pub fn has_module(&self, module: ModuleId) -> bool {
        self.available_modules.contains(&module)
    }

    /// Names of the top-level metadata properties the schema declares.
    pub fn metadata_fields(&self) -> Vec<&str> {
        self.metadata_schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
