//! # Subscription Tiers
//!
//! Two tier taxonomies coexist in tenant data:
//!
//! ```text
//! navigation scale:   starter ─▶ pro ─▶ elite
//! plan scale:         free ─▶ starter ─▶ pro ─▶ enterprise
//! ```
//!
//! Both reduce to the canonical [`Tier`] scale. `free` collapses onto
//! `starter` and `enterprise` onto `elite`; names present in both scales
//! keep the same relative position ([`tier_scales_agree`]).
//!
//! ## Security Invariant
//!
//! Normalization is fail-closed: a missing or unrecognized label resolves to
//! [`Tier::Starter`]. An unknown label must never grant elevated access.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VertexError;

/// The canonical ordinal tier scale. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Entry level. Also where `free` and unknown labels land.
    Starter,
    /// Mid level.
    Pro,
    /// Top level. `enterprise` is an alias.
    Elite,
}

/// Number of canonical tiers.
pub const TIER_COUNT: usize = 3;

impl Tier {
    /// The tier every unrecognized label normalizes to.
    pub const LOWEST: Tier = Tier::Starter;

    /// All tiers, lowest first.
    pub fn all() -> &'static [Tier] {
        &[Self::Starter, Self::Pro, Self::Elite]
    }

    /// Ordinal rank: starter 0, pro 1, elite 2.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Starter => 0,
            Self::Pro => 1,
            Self::Elite => 2,
        }
    }

    /// Lowercase identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Elite => "elite",
        }
    }

    /// Uppercase label shown on locked navigation entries.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Starter => "STARTER",
            Self::Pro => "PRO",
            Self::Elite => "ELITE",
        }
    }

    /// Whether this tier satisfies `minimum`.
    pub fn meets(self, minimum: Tier) -> bool {
        self.rank() >= minimum.rank()
    }

    /// Recognize a label from either taxonomy, case-insensitively.
    ///
    /// Returns `None` for unknown labels; [`normalize_tier`] applies the
    /// fail-closed default.
    pub fn from_label(label: &str) -> Option<Tier> {
        let normalized = label.trim().to_lowercase();
        if let Ok(tier) = normalized.parse::<Tier>() {
            return Some(tier);
        }
        normalized.parse::<PlanTier>().ok().map(PlanTier::canonical)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = VertexError;

    /// Strict parse of a navigation-scale label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            "elite" => Ok(Self::Elite),
            other => Err(VertexError::UnknownTier(other.to_string())),
        }
    }
}

/// The 4-level plan taxonomy used by billing and feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    /// No paid plan. Collapses onto [`Tier::Starter`].
    Free,
    /// Entry paid plan.
    Starter,
    /// Mid plan.
    Pro,
    /// Top plan. Collapses onto [`Tier::Elite`].
    Enterprise,
}

impl PlanTier {
    /// All plan tiers, lowest first.
    pub fn all() -> &'static [PlanTier] {
        &[Self::Free, Self::Starter, Self::Pro, Self::Enterprise]
    }

    /// Ordinal rank on the plan scale.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Starter => 1,
            Self::Pro => 2,
            Self::Enterprise => 3,
        }
    }

    /// Lowercase identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Position on the canonical scale.
    pub fn canonical(self) -> Tier {
        match self {
            Self::Free | Self::Starter => Tier::Starter,
            Self::Pro => Tier::Pro,
            Self::Enterprise => Tier::Elite,
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = VertexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(VertexError::UnknownTier(other.to_string())),
        }
    }
}

/// Normalize any tier label onto the canonical scale.
///
/// Empty labels are treated as missing. Both missing and unrecognized
/// labels resolve to [`Tier::LOWEST`].
pub fn normalize_tier(label: &str) -> Tier {
    if label.trim().is_empty() {
        tracing::debug!("missing tier label, using lowest tier");
        return Tier::LOWEST;
    }
    match Tier::from_label(label) {
        Some(tier) => tier,
        None => {
            tracing::warn!(tier = label, "unrecognized tier label, using lowest tier");
            Tier::LOWEST
        }
    }
}

/// `rank(tier) >= rank(minimum)`.
pub fn meets_minimum(tier: Tier, minimum: Tier) -> bool {
    tier.meets(minimum)
}

/// Whether the plan scale maps monotonically onto the canonical scale and
/// every label present in both scales lands on the tier of the same name.
pub fn tier_scales_agree() -> bool {
    let plans = PlanTier::all();
    let monotonic = plans.iter().all(|a| {
        plans
            .iter()
            .filter(|b| a.rank() <= b.rank())
            .all(|b| a.canonical() <= b.canonical())
    });
    let shared_names_agree = plans.iter().all(|plan| match plan.as_str().parse::<Tier>() {
        Ok(tier) => plan.canonical() == tier,
        Err(_) => true,
    });
    monotonic && shared_names_agree
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_tier() -> impl Strategy<Value = Tier> {
        prop::sample::select(Tier::all().to_vec())
    }

    proptest! {
        #[test]
        fn meets_minimum_reflexive(t in any_tier()) {
            prop_assert!(meets_minimum(t, t));
        }

        #[test]
        fn meets_minimum_transitive(a in any_tier(), b in any_tier(), c in any_tier()) {
            if meets_minimum(a, b) && meets_minimum(b, c) {
                prop_assert!(meets_minimum(a, c));
            }
        }

        #[test]
        fn unknown_labels_never_elevate(label in "[a-z]{0,12}") {
            let tier = normalize_tier(&label);
            if Tier::from_label(&label).is_none() {
                prop_assert_eq!(tier, Tier::Starter);
            }
        }

        #[test]
        fn normalize_is_idempotent(label in ".{0,16}") {
            prop_assert_eq!(normalize_tier(&label), normalize_tier(&label));
        }
    }
}
