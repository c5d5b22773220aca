//! # Registry Errors
//!
//! Every variant here is a deployment mistake, not a tenant-data mistake.
//! A registry that fails to build must stop startup.

use thiserror::Error;
use vertex_core::{ServiceKey, Vertical};

/// Error building or patching a [`VerticalRegistry`](crate::VerticalRegistry).
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A canonical vertical has no configuration.
    #[error("registry has no configuration for vertical {0}")]
    MissingVertical(Vertical),

    /// A canonical vertical was configured twice.
    #[error("vertical {0} is configured more than once")]
    DuplicateVertical(Vertical),

    /// A vocabulary term is empty.
    #[error("vertical {vertical} has an empty vocabulary term for {key}")]
    EmptyVocabularyTerm {
        /// Vertical carrying the blank term.
        vertical: Vertical,
        /// The blank key.
        key: ServiceKey,
    },

    /// An override names something that is not a vertical or synonym.
    #[error("override key {0:?} does not name a known vertical")]
    UnknownVerticalKey(String),

    /// The override file could not be read or parsed.
    #[error("config load error for '{path}': {reason}")]
    ConfigLoad {
        /// Source path, or `<inline>` for string input.
        path: String,
        /// Reason the file was rejected.
        reason: String,
    },
}
