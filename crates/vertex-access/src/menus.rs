//! # Per-Vertical Menu Tables
//!
//! Each vertical either owns an ordered entry table or aliases the table of
//! a vertical with the same UI shape. Aliases are one hop deep;
//! [`validate_menus`] rejects chains at startup.

use vertex_core::{Tier, Vertical, VERTICAL_COUNT};

use crate::error::MenuError;
use crate::navigation::NavigationEntry;

/// Where a vertical's menu comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSource {
    Own(&'static [NavigationEntry]),
    AliasOf(Vertical),
}

const DASHBOARD: NavigationEntry = NavigationEntry::open("layout-dashboard", "Tableau de bord", "/dashboard");
const CALLS: NavigationEntry = NavigationEntry::open("phone", "Appels", "/calls");
const SETTINGS: NavigationEntry = NavigationEntry::open("settings", "Réglages", "/settings");

const RESTAURANT: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Réservations", "/bookings"),
    NavigationEntry::open("package", "Carte & stock", "/catalogue"),
    NavigationEntry::gated("armchair", "Plan de salle", "/tables", Tier::Pro),
    NavigationEntry::gated("book-open", "Éditeur de carte", "/menu-editor", Tier::Pro),
    NavigationEntry::gated("megaphone", "Promotions", "/promotions", Tier::Pro),
    NavigationEntry::gated("chef-hat", "Cuisine", "/kitchen", Tier::Elite),
    NavigationEntry::gated("bar-chart", "Statistiques", "/analytics", Tier::Pro),
    SETTINGS,
];

const BEAUTY: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Agenda", "/calendar"),
    NavigationEntry::open("package", "Prestations", "/catalogue"),
    NavigationEntry::gated("users", "Équipe", "/team", Tier::Pro),
    NavigationEntry::gated("megaphone", "Promotions", "/promotions", Tier::Pro),
    NavigationEntry::gated("star", "Avis clients", "/reputation", Tier::Elite),
    SETTINGS,
];

const MEDICAL: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Agenda", "/calendar"),
    NavigationEntry::open("users", "Patients", "/clients"),
    NavigationEntry::gated("door-open", "Salles", "/resources", Tier::Pro),
    NavigationEntry::gated("siren", "Arrêt d'urgence", "/panic", Tier::Elite),
    NavigationEntry::gated("bar-chart", "Statistiques", "/analytics", Tier::Pro),
    SETTINGS,
];

const LEGAL: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Agenda", "/calendar"),
    NavigationEntry::open("folder", "Dossiers", "/cases"),
    NavigationEntry::gated("messages-square", "Messagerie", "/chat", Tier::Pro),
    NavigationEntry::gated("bar-chart", "Statistiques", "/analytics", Tier::Pro),
    NavigationEntry::gated("code", "Accès API", "/api", Tier::Elite),
    SETTINGS,
];

const REAL_ESTATE: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Visites", "/visits"),
    NavigationEntry::open("home", "Biens", "/catalogue"),
    NavigationEntry::gated("megaphone", "Promotions", "/promotions", Tier::Pro),
    NavigationEntry::gated("building", "Agences", "/locations", Tier::Elite),
    SETTINGS,
];

const AUTOMOTIVE: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Planning atelier", "/workshop"),
    NavigationEntry::open("package", "Pièces", "/catalogue"),
    NavigationEntry::gated("file-text", "Devis", "/quotes", Tier::Pro),
    NavigationEntry::gated("zap", "Déclencheurs", "/triggers", Tier::Elite),
    SETTINGS,
];

const TRADES: &[NavigationEntry] = &[
    DASHBOARD,
    CALLS,
    NavigationEntry::open("calendar", "Interventions", "/jobs"),
    NavigationEntry::gated("map", "Carte", "/dispatch", Tier::Pro),
    NavigationEntry::gated("file-text", "Devis", "/quotes", Tier::Pro),
    NavigationEntry::gated("zap", "Déclencheurs", "/triggers", Tier::Elite),
    SETTINGS,
];

/// Menu source for `vertical`.
pub fn menu_source(vertical: Vertical) -> MenuSource {
    match vertical {
        Vertical::Restaurant => MenuSource::Own(RESTAURANT),
        Vertical::Beauty => MenuSource::Own(BEAUTY),
        Vertical::Fitness => MenuSource::AliasOf(Vertical::Beauty),
        Vertical::Medical => MenuSource::Own(MEDICAL),
        Vertical::Legal => MenuSource::Own(LEGAL),
        Vertical::RealEstate => MenuSource::Own(REAL_ESTATE),
        Vertical::Automotive => MenuSource::Own(AUTOMOTIVE),
        Vertical::Trades => MenuSource::Own(TRADES),
    }
}

/// Entry table for `vertical`, following aliases.
///
/// Returns an empty table for an alias cycle, which [`validate_menus`]
/// reports at startup.
pub fn entries_for(vertical: Vertical) -> &'static [NavigationEntry] {
    follow_aliases(vertical, menu_source)
}

fn follow_aliases(
    vertical: Vertical,
    source: impl Fn(Vertical) -> MenuSource,
) -> &'static [NavigationEntry] {
    let mut current = vertical;
    for _ in 0..VERTICAL_COUNT {
        match source(current) {
            MenuSource::Own(entries) => return entries,
            MenuSource::AliasOf(target) => current = target,
        }
    }
    &[]
}

/// Check every menu table.
///
/// # Errors
///
/// Returns the first [`MenuError`] found.
pub fn validate_menus() -> Result<(), MenuError> {
    check_menu_sources(menu_source)
}

/// Check the menu tables described by `source`: aliases must point at a
/// vertical with its own menu, owned menus must be non-empty, and paths
/// must be unique within a menu.
///
/// # Errors
///
/// Returns the first [`MenuError`] found, in canonical vertical order.
pub fn check_menu_sources(source: impl Fn(Vertical) -> MenuSource) -> Result<(), MenuError> {
    for vertical in Vertical::all() {
        let entries = match source(*vertical) {
            MenuSource::Own(entries) => entries,
            MenuSource::AliasOf(target) => match source(target) {
                MenuSource::Own(_) => continue,
                MenuSource::AliasOf(_) => {
                    return Err(MenuError::AliasChain {
                        vertical: *vertical,
                        target,
                    })
                }
            },
        };
        if entries.is_empty() {
            return Err(MenuError::EmptyMenu(*vertical));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(MenuError::DuplicatePath {
                    vertical: *vertical,
                    path: entry.path.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menus_valid() {
        assert_eq!(validate_menus(), Ok(()));
    }

    #[test]
    fn test_alias_reuses_table_verbatim() {
        assert!(std::ptr::eq(
            entries_for(Vertical::Fitness),
            entries_for(Vertical::Beauty)
        ));
    }

    #[test]
    fn test_every_vertical_has_entries() {
        for vertical in Vertical::all() {
            assert!(!entries_for(*vertical).is_empty(), "{vertical} has no menu");
        }
    }

    #[test]
    fn test_every_menu_starts_open() {
        for vertical in Vertical::all() {
            let first = entries_for(*vertical)[0];
            assert_eq!(first.path, "/dashboard");
            assert_eq!(first.minimum_tier, None);
        }
    }

    const DUPLICATED: &[NavigationEntry] = &[DASHBOARD, CALLS, DASHBOARD];

    #[test]
    fn test_alias_chain_rejected() {
        let source = |v: Vertical| match v {
            Vertical::Fitness => MenuSource::AliasOf(Vertical::Medical),
            Vertical::Medical => MenuSource::AliasOf(Vertical::Beauty),
            other => menu_source(other),
        };
        assert_eq!(
            check_menu_sources(source),
            Err(MenuError::AliasChain {
                vertical: Vertical::Fitness,
                target: Vertical::Medical,
            })
        );
    }

    #[test]
    fn test_empty_menu_rejected() {
        let source = |v: Vertical| match v {
            Vertical::Legal => MenuSource::Own(&[]),
            other => menu_source(other),
        };
        assert_eq!(
            check_menu_sources(source),
            Err(MenuError::EmptyMenu(Vertical::Legal))
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let source = |v: Vertical| match v {
            Vertical::Trades => MenuSource::Own(DUPLICATED),
            other => menu_source(other),
        };
        assert_eq!(
            check_menu_sources(source),
            Err(MenuError::DuplicatePath {
                vertical: Vertical::Trades,
                path: "/dashboard".to_string(),
            })
        );
    }

    #[test]
    fn test_alias_cycle_yields_empty_table() {
        let source = |v: Vertical| match v {
            Vertical::Beauty => MenuSource::AliasOf(Vertical::Fitness),
            Vertical::Fitness => MenuSource::AliasOf(Vertical::Beauty),
            other => menu_source(other),
        };
        assert!(follow_aliases(Vertical::Fitness, source).is_empty());
        assert!(std::ptr::eq(
            follow_aliases(Vertical::Legal, source),
            LEGAL
        ));
        assert!(check_menu_sources(source).is_err());
    }

    #[test]
    fn test_restaurant_gates() {
        let gate = |path: &str| {
            RESTAURANT
                .iter()
                .find(|e| e.path == path)
                .and_then(|e| e.minimum_tier)
        };
        assert_eq!(gate("/tables"), Some(Tier::Pro));
        assert_eq!(gate("/menu-editor"), Some(Tier::Pro));
        assert_eq!(gate("/kitchen"), Some(Tier::Elite));
        assert_eq!(gate("/bookings"), None);
    }
}
