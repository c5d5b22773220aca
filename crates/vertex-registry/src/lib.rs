//! # vertex-registry: Vertical Configuration Registry
//!
//! Maps every canonical [`Vertical`](vertex_core::Vertical) to one
//! [`VerticalConfig`]: the vocabulary, icons, metadata schema, opt-in
//! modules, and theme the dashboard uses for tenants of that vertical.
//!
//! ## Resolution Policy
//!
//! Lookups by free-text label are **fail-open**: a label that is neither a
//! canonical identifier nor a known synonym resolves to the `restaurant`
//! configuration, so the dashboard can always render. Callers that need
//! strictness parse the label with `Vertical::from_str` first.
//!
//! ## Construction
//!
//! - [`VerticalRegistry::builtin`]: the compiled-in table. Exhaustive over
//!   `Vertical`, so it cannot be incomplete.
//! - [`VerticalRegistry::from_configs`]: an explicit table. A missing
//!   canonical vertical is a [`RegistryError`], never a silent fallback.
//! - [`VerticalRegistry::with_overrides`]: the builtin table patched from a
//!   YAML deployment file ([`RegistryOverrides`]).
//!
//! The process-wide builtin table is built once on first use and shared
//! read-only ([`builtin_registry`]).

pub mod builtin;
pub mod config;
pub mod error;
pub mod overrides;
pub mod registry;

pub use config::{ColorScheme, IconPair, ModuleId, VerticalConfig};
pub use error::RegistryError;
pub use overrides::{RegistryOverrides, VerticalOverride};
pub use registry::{
    builtin_registry, get_vocabulary, resolve_vertical_config, resolve_vertical_label,
    VerticalRegistry,
};
