//! # vertex-engine: Tenant Resolution Facade
//!
//! One [`Engine`] is built at startup and shared by every tenant session.
//! Building it runs every startup check the lower crates define:
//!
//! 1. The registry is complete (exhaustive builtin table, or an override
//!    file that resolves cleanly).
//! 2. Every vertical's metadata schema compiles.
//! 3. The menu tables are well formed (no alias chains, no empty menus).
//! 4. The two tier taxonomies agree on order.
//!
//! Any failure is an [`EngineError`] and the process should not serve.
//! After construction nothing fails: vertical labels resolve fail-open,
//! tier labels fail-closed, and metadata mistakes come back as
//! [`MetadataViolations`](vertex_schema::MetadataViolations).
//!
//! The engine is immutable and `Send + Sync`. Share it behind an `Arc` or a
//! `static`; no locking is needed.

pub mod engine;
pub mod error;
pub mod resolution;

pub use engine::Engine;
pub use error::EngineError;
pub use resolution::TenantResolution;
