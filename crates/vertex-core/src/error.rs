//! # Error Types
//!
//! Strict-parse failures for the core enumerations. The lenient resolvers
//! (`Vertical::resolve`, [`crate::normalize_tier`]) never produce these; they
//! exist for callers that want to reject a label before it reaches a
//! fail-open or fail-closed path.

use thiserror::Error;

/// Top-level error type for core parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    /// The label is not a canonical vertical identifier.
    #[error("unknown vertical: {0:?}")]
    UnknownVertical(String),

    /// The label is not a tier of the requested taxonomy.
    #[error("unknown tier: {0:?}")]
    UnknownTier(String),

    /// The label is not a vocabulary key.
    #[error("unknown vocabulary key: {0:?}")]
    UnknownServiceKey(String),

    /// The tenant identifier is not a valid UUID.
    #[error("invalid tenant id {value:?}: {reason}")]
    InvalidTenantId {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
