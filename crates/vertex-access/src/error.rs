//! # Menu Table Errors
//!
//! Raised when the static menu tables are checked at startup, and when a
//! menu mode label does not parse.

use thiserror::Error;
use vertex_core::Vertical;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A vertical aliases a vertical that is itself an alias.
    #[error("menu of {vertical} aliases {target}, which has no menu of its own")]
    AliasChain {
        /// The aliasing vertical.
        vertical: Vertical,
        /// The alias target.
        target: Vertical,
    },

    /// A vertical owns an empty menu.
    #[error("menu of {0} has no entries")]
    EmptyMenu(Vertical),

    /// Two entries of one menu share a path.
    #[error("menu of {vertical} lists path {path} more than once")]
    DuplicatePath {
        /// Menu owner.
        vertical: Vertical,
        /// The repeated path.
        path: String,
    },

    /// A menu mode label is neither `omit` nor `locked`.
    #[error("unknown menu mode {0:?}, expected omit or locked")]
    UnknownMode(String),
}
