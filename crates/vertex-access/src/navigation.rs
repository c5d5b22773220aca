//! # Navigation Composer
//!
//! Combines a vertical's entry table with the tenant's tier. Entries
//! without a minimum tier are always visible. For gated entries the caller
//! picks a [`MenuMode`]:
//!
//! - [`MenuMode::Omit`] drops entries the tier cannot reach (sidebar).
//! - [`MenuMode::Locked`] keeps them, marked locked and annotated with the
//!   required tier label (upsell surfaces).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use vertex_core::{normalize_tier, Tier, Vertical};
use vertex_registry::resolve_vertical_label;

use crate::error::MenuError;
use crate::menus::entries_for;

/// One static menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    /// `None` means always visible.
    pub minimum_tier: Option<Tier>,
}

impl NavigationEntry {
    /// Entry visible at every tier.
    pub const fn open(icon: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            icon,
            label,
            path,
            minimum_tier: None,
        }
    }

    /// Entry gated on `tier`.
    pub const fn gated(
        icon: &'static str,
        label: &'static str,
        path: &'static str,
        tier: Tier,
    ) -> Self {
        Self {
            icon,
            label,
            path,
            minimum_tier: Some(tier),
        }
    }

    /// Whether `tier` reaches this entry.
    pub fn reachable_by(&self, tier: Tier) -> bool {
        self.minimum_tier.map_or(true, |minimum| tier.meets(minimum))
    }
}

/// How unreachable entries are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuMode {
    #[default]
    Omit,
    Locked,
}

impl MenuMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::Locked => "locked",
        }
    }
}

impl std::fmt::Display for MenuMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuMode {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "omit" => Ok(Self::Omit),
            "locked" => Ok(Self::Locked),
            other => Err(MenuError::UnknownMode(other.to_string())),
        }
    }
}

/// A composed menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub minimum_tier: Option<Tier>,
    /// The tenant's tier cannot use this entry.
    pub locked: bool,
    /// Required tier label (`PRO`, `ELITE`) on locked entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_label: Option<&'static str>,
}

/// Compose the menu of a canonical vertical for a canonical tier.
pub fn compose_menu(vertical: Vertical, tier: Tier, mode: MenuMode) -> Vec<MenuItem> {
    let entries = entries_for(vertical);
    let items: Vec<MenuItem> = entries
        .iter()
        .filter_map(|entry| {
            let reachable = entry.reachable_by(tier);
            match (reachable, mode) {
                (false, MenuMode::Omit) => None,
                _ => Some(MenuItem {
                    icon: entry.icon,
                    label: entry.label,
                    path: entry.path,
                    minimum_tier: entry.minimum_tier,
                    locked: !reachable,
                    required_label: if reachable {
                        None
                    } else {
                        entry.minimum_tier.map(|t| t.display_label())
                    },
                }),
            }
        })
        .collect();
    tracing::debug!(
        vertical = %vertical,
        tier = %tier,
        mode = %mode,
        entries = entries.len(),
        items = items.len(),
        "composed navigation menu"
    );
    items
}

/// Compose a menu from free-text labels: the vertical resolves fail-open,
/// the tier fail-closed.
pub fn build_menu(vertical: &str, tier: &str, mode: MenuMode) -> Vec<MenuItem> {
    compose_menu(resolve_vertical_label(vertical), normalize_tier(tier), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.path).collect()
    }

    #[test]
    fn test_restaurant_starter_omit() {
        let menu = build_menu("restaurant", "starter", MenuMode::Omit);
        let paths = paths(&menu);
        assert!(!paths.contains(&"/tables"));
        assert!(!paths.contains(&"/menu-editor"));
        assert!(paths.contains(&"/dashboard"));
        assert!(menu.iter().all(|i| !i.locked));
    }

    #[test]
    fn test_restaurant_starter_locked() {
        let menu = build_menu("restaurant", "starter", MenuMode::Locked);
        assert_eq!(menu.len(), entries_for(Vertical::Restaurant).len());
        for path in ["/tables", "/menu-editor"] {
            let item = menu.iter().find(|i| i.path == path).unwrap();
            assert!(item.locked);
            assert_eq!(item.required_label, Some("PRO"));
        }
        let kitchen = menu.iter().find(|i| i.path == "/kitchen").unwrap();
        assert_eq!(kitchen.required_label, Some("ELITE"));
        let dashboard = menu.iter().find(|i| i.path == "/dashboard").unwrap();
        assert!(!dashboard.locked);
        assert_eq!(dashboard.required_label, None);
    }

    #[test]
    fn test_pro_unlocks_pro_entries() {
        let menu = build_menu("restaurant", "pro", MenuMode::Locked);
        let tables = menu.iter().find(|i| i.path == "/tables").unwrap();
        assert!(!tables.locked);
        let kitchen = menu.iter().find(|i| i.path == "/kitchen").unwrap();
        assert!(kitchen.locked);
    }

    #[test]
    fn test_elite_sees_everything() {
        for vertical in Vertical::all() {
            let omit = compose_menu(*vertical, Tier::Elite, MenuMode::Omit);
            let locked = compose_menu(*vertical, Tier::Elite, MenuMode::Locked);
            assert_eq!(omit, locked);
            assert_eq!(omit.len(), entries_for(*vertical).len());
        }
    }

    #[test]
    fn test_order_preserved() {
        let entries = entries_for(Vertical::Automotive);
        let menu = compose_menu(Vertical::Automotive, Tier::Pro, MenuMode::Omit);
        let expected: Vec<_> = entries
            .iter()
            .filter(|e| e.reachable_by(Tier::Pro))
            .map(|e| e.path)
            .collect();
        assert_eq!(paths(&menu), expected);
    }

    #[test]
    fn test_unknown_vertical_and_tier() {
        assert_eq!(
            build_menu("bakery", "platinum", MenuMode::Omit),
            compose_menu(Vertical::Restaurant, Tier::Starter, MenuMode::Omit)
        );
    }

    #[test]
    fn test_menu_mode_parse() {
        assert_eq!("locked".parse::<MenuMode>().unwrap(), MenuMode::Locked);
        assert_eq!(
            "hidden".parse::<MenuMode>(),
            Err(MenuError::UnknownMode("hidden".to_string()))
        );
        assert_eq!(MenuMode::default(), MenuMode::Omit);
    }

    #[test]
    fn test_serialized_item() {
        let menu = build_menu("restaurant", "starter", MenuMode::Locked);
        let tables = menu.iter().find(|i| i.path == "/tables").unwrap();
        let value = serde_json::to_value(tables).unwrap();
        assert_eq!(value["minimumTier"], "pro");
        assert_eq!(value["requiredLabel"], "PRO");
        assert_eq!(value["locked"], true);
    }
}
