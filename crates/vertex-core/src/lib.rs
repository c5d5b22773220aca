#![deny(missing_docs)]
//! # vertex-core: Foundational Types for the Vertex Engine
//!
//! This crate is the leaf of the Vertex workspace. It defines the closed
//! vocabularies every other crate resolves against: which business verticals
//! exist, which semantic vocabulary keys a vertical must label, and the one
//! ordinal tier scale that gates features and navigation.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Vertical` enum.** One definition, 8 variants, exhaustive
//!    `match` everywhere. Legacy and alternate-language labels are handled by
//!    an explicit synonym map in front of the enum, never by extra variants.
//!
//! 2. **Single canonical `Tier` scale.** The surrounding system speaks two tier
//!    taxonomies (`starter/pro/elite` and `free/starter/pro/enterprise`).
//!    Both collapse onto [`Tier`] through [`normalize_tier`]; unknown labels
//!    collapse onto the lowest tier.
//!
//! 3. **Complete vocabularies.** [`Vocabulary`] has one field per
//!    [`ServiceKey`], so a partial vocabulary cannot be constructed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vertex-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod tier;
pub mod vertical;
pub mod vocabulary;

pub use error::VertexError;
pub use identity::{TenantId, TenantProfile};
pub use tier::{meets_minimum, normalize_tier, tier_scales_agree, PlanTier, Tier, TIER_COUNT};
pub use vertical::{Vertical, VERTICAL_COUNT};
pub use vocabulary::{ServiceKey, Vocabulary, SERVICE_KEY_COUNT};
