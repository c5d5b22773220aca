//! # Business Vertical: Single Source of Truth
//!
//! Defines the `Vertical` enum with all 8 business verticals a tenant can
//! declare. Every `match` on `Vertical` must be exhaustive, so adding a
//! vertical forces the registry, schemas, and menus to handle it at
//! compile time.
//!
//! ## Synonyms
//!
//! Tenant profiles carry free-text labels, including legacy French labels
//! from before the canonical set existed (`garage`, `beauté`, `immobilier`).
//! These map onto canonical variants through [`SYNONYMS`], consulted by
//! [`Vertical::resolve`]. There is exactly one configuration per canonical
//! vertical; synonyms never get their own.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VertexError;

/// All business verticals served by the dashboard.
///
/// | # | Vertical | Typical tenant |
/// |---|----------|----------------|
/// | 1 | Restaurant | Restaurants, cafés, bars |
/// | 2 | Beauty | Hair and beauty salons, spas |
/// | 3 | Fitness | Gyms, yoga and coaching studios |
/// | 4 | Medical | Medical and paramedical practices |
/// | 5 | Legal | Law firms, notaries |
/// | 6 | RealEstate | Real-estate agencies |
/// | 7 | Automotive | Garages, body shops |
/// | 8 | Trades | Plumbers, electricians, field services |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    /// Restaurants and food service. Also the fail-open default.
    Restaurant,
    /// Beauty salons, barbers, spas.
    Beauty,
    /// Fitness studios and gyms.
    Fitness,
    /// Medical practices.
    Medical,
    /// Legal offices.
    Legal,
    /// Real-estate agencies.
    RealEstate,
    /// Automotive garages.
    Automotive,
    /// Trades and on-site services.
    Trades,
}

/// Total number of canonical verticals.
pub const VERTICAL_COUNT: usize = 8;

/// Legacy and alternate labels, already in normalized form
/// (see [`Vertical::normalize_label`]).
pub const SYNONYMS: &[(&str, Vertical)] = &[
    ("restauration", Vertical::Restaurant),
    ("resto", Vertical::Restaurant),
    ("beaute", Vertical::Beauty),
    ("beauté", Vertical::Beauty),
    ("salon", Vertical::Beauty),
    ("coiffure", Vertical::Beauty),
    ("esthetique", Vertical::Beauty),
    ("esthétique", Vertical::Beauty),
    ("sport", Vertical::Fitness),
    ("salle_de_sport", Vertical::Fitness),
    ("coaching", Vertical::Fitness),
    ("medecin", Vertical::Medical),
    ("médecin", Vertical::Medical),
    ("medical_practice", Vertical::Medical),
    ("sante", Vertical::Medical),
    ("santé", Vertical::Medical),
    ("cabinet_medical", Vertical::Medical),
    ("cabinet_médical", Vertical::Medical),
    ("juridique", Vertical::Legal),
    ("avocat", Vertical::Legal),
    ("notaire", Vertical::Legal),
    ("legal_office", Vertical::Legal),
    ("immobilier", Vertical::RealEstate),
    ("realestate", Vertical::RealEstate),
    ("agence_immobiliere", Vertical::RealEstate),
    ("agence_immobilière", Vertical::RealEstate),
    ("garage", Vertical::Automotive),
    ("auto", Vertical::Automotive),
    ("automobile", Vertical::Automotive),
    ("mecanique", Vertical::Automotive),
    ("mécanique", Vertical::Automotive),
    ("artisan", Vertical::Trades),
    ("btp", Vertical::Trades),
    ("services", Vertical::Trades),
    ("depannage", Vertical::Trades),
    ("dépannage", Vertical::Trades),
];

impl Vertical {
    /// The vertical used when a label cannot be resolved.
    pub const DEFAULT: Vertical = Vertical::Restaurant;

    /// Returns all 8 verticals in canonical order.
    pub fn all() -> &'static [Vertical] {
        &[
            Self::Restaurant,
            Self::Beauty,
            Self::Fitness,
            Self::Medical,
            Self::Legal,
            Self::RealEstate,
            Self::Automotive,
            Self::Trades,
        ]
    }

    /// Position of this vertical in [`Vertical::all`]. Registries use it as
    /// a dense array index.
    pub fn index(&self) -> usize {
        match self {
            Self::Restaurant => 0,
            Self::Beauty => 1,
            Self::Fitness => 2,
            Self::Medical => 3,
            Self::Legal => 4,
            Self::RealEstate => 5,
            Self::Automotive => 6,
            Self::Trades => 7,
        }
    }

    /// Returns the snake_case identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Beauty => "beauty",
            Self::Fitness => "fitness",
            Self::Medical => "medical",
            Self::Legal => "legal",
            Self::RealEstate => "real_estate",
            Self::Automotive => "automotive",
            Self::Trades => "trades",
        }
    }

    /// Lowercases, trims, and folds `-` and spaces to `_`.
    pub fn normalize_label(label: &str) -> String {
        label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect()
    }

    /// Resolve a free-text label to a canonical vertical.
    ///
    /// Accepts canonical identifiers and every entry of [`SYNONYMS`],
    /// compared after [`Vertical::normalize_label`]. Returns `None` for
    /// anything else; the caller chooses the fallback policy.
    pub fn resolve(label: &str) -> Option<Vertical> {
        let normalized = Self::normalize_label(label);
        if let Ok(vertical) = normalized.parse::<Vertical>() {
            return Some(vertical);
        }
        SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == normalized)
            .map(|(_, vertical)| {
                tracing::debug!(label, vertical = %vertical, "vertical resolved through synonym");
                *vertical
            })
    }

    /// Synonyms that resolve to this vertical.
    pub fn synonyms(&self) -> impl Iterator<Item = &'static str> + '_ {
        SYNONYMS
            .iter()
            .filter(move |(_, v)| v == self)
            .map(|(s, _)| *s)
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = VertexError;

    /// Strict parse of a canonical identifier. Synonyms are rejected; use
    /// [`Vertical::resolve`] to accept them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(Self::Restaurant),
            "beauty" => Ok(Self::Beauty),
            "fitness" => Ok(Self::Fitness),
            "medical" => Ok(Self::Medical),
            "legal" => Ok(Self::Legal),
            "real_estate" => Ok(Self::RealEstate),
            "automotive" => Ok(Self::Automotive),
            "trades" => Ok(Self::Trades),
            other => Err(VertexError::UnknownVertical(other.to_string())),
        }
    }
}
