//! # Feature Flags
//!
//! Capability switches derived from the canonical tier. Each [`Feature`]
//! has exactly one [`Feature::required_tier`]; a flag is on when the tier
//! meets it. Three bands result:
//!
//! | Band | Features |
//! |------|----------|
//! | starter | live call feed, calendar (read) |
//! | pro | calendar (write), resources, team chat, basic analytics, catalogue editing, promotions |
//! | elite | advanced analytics, panic button, smart triggers, reputation AI, multi-location, kitchen view, ghost mode, API access |
//!
//! ## Security Invariant
//!
//! Monotonicity: a flag that is on at some tier is on at every higher tier.
//! It follows from the single-threshold definition; the tests check it
//! anyway for every flag and tier pair.

use serde::{Deserialize, Serialize};
use vertex_core::Tier;

/// Every gated capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    /// Read access to the live call feed.
    LiveCallFeed,
    /// Read access to the calendar.
    ViewCalendar,
    /// Create and move bookings in the calendar.
    EditCalendar,
    ResourceManagement,
    TeamChat,
    BasicAnalytics,
    /// Catalogue / menu editing.
    CatalogueEditing,
    Promotions,
    AdvancedAnalytics,
    /// Emergency stop for an ongoing call.
    PanicButton,
    SmartTriggers,
    ReputationAi,
    MultiLocation,
    /// Kitchen / operational display.
    KitchenView,
    /// Silent supervision of live calls.
    GhostMode,
    ApiAccess,
}

/// Number of features.
pub const FEATURE_COUNT: usize = 16;

impl Feature {
    /// All features, lowest band first.
    pub fn all() -> &'static [Feature] {
        &[
            Self::LiveCallFeed,
            Self::ViewCalendar,
            Self::EditCalendar,
            Self::ResourceManagement,
            Self::TeamChat,
            Self::BasicAnalytics,
            Self::CatalogueEditing,
            Self::Promotions,
            Self::AdvancedAnalytics,
            Self::PanicButton,
            Self::SmartTriggers,
            Self::ReputationAi,
            Self::MultiLocation,
            Self::KitchenView,
            Self::GhostMode,
            Self::ApiAccess,
        ]
    }

    /// Lowest tier at which the feature is on.
    pub fn required_tier(&self) -> Tier {
        match self {
            Self::LiveCallFeed | Self::ViewCalendar => Tier::Starter,
            Self::EditCalendar
            | Self::ResourceManagement
            | Self::TeamChat
            | Self::BasicAnalytics
            | Self::CatalogueEditing
            | Self::Promotions => Tier::Pro,
            Self::AdvancedAnalytics
            | Self::PanicButton
            | Self::SmartTriggers
            | Self::ReputationAi
            | Self::MultiLocation
            | Self::KitchenView
            | Self::GhostMode
            | Self::ApiAccess => Tier::Elite,
        }
    }

    /// camelCase name, matching the serialized flag record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LiveCallFeed => "liveCallFeed",
            Self::ViewCalendar => "viewCalendar",
            Self::EditCalendar => "editCalendar",
            Self::ResourceManagement => "resourceManagement",
            Self::TeamChat => "teamChat",
            Self::BasicAnalytics => "basicAnalytics",
            Self::CatalogueEditing => "catalogueEditing",
            Self::Promotions => "promotions",
            Self::AdvancedAnalytics => "advancedAnalytics",
            Self::PanicButton => "panicButton",
            Self::SmartTriggers => "smartTriggers",
            Self::ReputationAi => "reputationAi",
            Self::MultiLocation => "multiLocation",
            Self::KitchenView => "kitchenView",
            Self::GhostMode => "ghostMode",
            Self::ApiAccess => "apiAccess",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved capability record. Derived on every resolution, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub live_call_feed: bool,
    pub view_calendar: bool,
    pub edit_calendar: bool,
    pub resource_management: bool,
    pub team_chat: bool,
    pub basic_analytics: bool,
    pub catalogue_editing: bool,
    pub promotions: bool,
    pub advanced_analytics: bool,
    pub panic_button: bool,
    pub smart_triggers: bool,
    pub reputation_ai: bool,
    pub multi_location: bool,
    pub kitchen_view: bool,
    pub ghost_mode: bool,
    pub api_access: bool,
}

impl FeatureFlags {
    /// Flags for `tier`.
    pub fn for_tier(tier: Tier) -> Self {
        let on = |feature: Feature| tier.meets(feature.required_tier());
        Self {
            live_call_feed: on(Feature::LiveCallFeed),
            view_calendar: on(Feature::ViewCalendar),
            edit_calendar: on(Feature::EditCalendar),
            resource_management: on(Feature::ResourceManagement),
            team_chat: on(Feature::TeamChat),
            basic_analytics: on(Feature::BasicAnalytics),
            catalogue_editing: on(Feature::CatalogueEditing),
            promotions: on(Feature::Promotions),
            advanced_analytics: on(Feature::AdvancedAnalytics),
            panic_button: on(Feature::PanicButton),
            smart_triggers: on(Feature::SmartTriggers),
            reputation_ai: on(Feature::ReputationAi),
            multi_location: on(Feature::MultiLocation),
            kitchen_view: on(Feature::KitchenView),
            ghost_mode: on(Feature::GhostMode),
            api_access: on(Feature::ApiAccess),
        }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::LiveCallFeed => self.live_call_feed,
            Feature::ViewCalendar => self.view_calendar,
            Feature::EditCalendar => self.edit_calendar,
            Feature::ResourceManagement => self.resource_management,
            Feature::TeamChat => self.team_chat,
            Feature::BasicAnalytics => self.basic_analytics,
            Feature::CatalogueEditing => self.catalogue_editing,
            Feature::Promotions => self.promotions,
            Feature::AdvancedAnalytics => self.advanced_analytics,
            Feature::PanicButton => self.panic_button,
            Feature::SmartTriggers => self.smart_triggers,
            Feature::ReputationAi => self.reputation_ai,
            Feature::MultiLocation => self.multi_location,
            Feature::KitchenView => self.kitchen_view,
            Feature::GhostMode => self.ghost_mode,
            Feature::ApiAccess => self.api_access,
        }
    }

    /// Features that are on, in [`Feature::all`] order.
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::all()
            .iter()
            .copied()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

/// Flags for a canonical tier.
pub fn resolve_feature_flags(tier: Tier) -> FeatureFlags {
    FeatureFlags::for_tier(tier)
}
