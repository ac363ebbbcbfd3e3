//! Error types.
//!
//! Selection operations themselves never fail; out-of-range targets are
//! no-ops. Errors only arise at the configuration edges.

use thiserror::Error;

use crate::input::KeyCombo;
use crate::keynav::NavDirection;

/// Errors from parsing or validating selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A mode name did not match any known selection mode.
    #[error("unknown selection mode '{0}' (expected single, multi or simple)")]
    UnknownMode(String),

    /// Two navigation directions are bound to the same key.
    #[error("key {key:?} is bound to both {first:?} and {second:?}")]
    ConflictingKeyBinding {
        key: KeyCombo,
        first: NavDirection,
        second: NavDirection,
    },
}
