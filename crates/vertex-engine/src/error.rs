//! # Engine Startup Errors

use thiserror::Error;
use vertex_access::MenuError;
use vertex_registry::RegistryError;
use vertex_schema::SchemaError;

/// A startup check failed. Every variant is fatal.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("navigation: {0}")]
    Menu(#[from] MenuError),

    /// `PlanTier::canonical` does not preserve the plan order.
    #[error("plan tier order disagrees with the canonical tier scale")]
    TierScalesDisagree,
}
