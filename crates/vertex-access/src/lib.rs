//! # vertex-access: Tier-Gated Features and Navigation
//!
//! Everything a tenant may *do* in the dashboard is decided here from the
//! canonical [`Tier`](vertex_core::Tier):
//!
//! - [`flags`]: the flat [`FeatureFlags`] record. Each flag has one
//!   minimum tier, so flags are monotonic in tier by construction.
//! - [`navigation`]: the ordered menu for a vertical, with entries the tier
//!   cannot reach either omitted or shown locked ([`MenuMode`]).
//! - [`menus`]: the per-vertical entry tables. Verticals with the same UI
//!   shape alias another vertical's table instead of copying it.

pub mod error;
pub mod flags;
pub mod menus;
pub mod navigation;

pub use error::MenuError;
pub use flags::{resolve_feature_flags, Feature, FeatureFlags, FEATURE_COUNT};
pub use menus::{check_menu_sources, entries_for, menu_source, validate_menus, MenuSource};
pub use navigation::{build_menu, compose_menu, MenuItem, MenuMode, NavigationEntry};
