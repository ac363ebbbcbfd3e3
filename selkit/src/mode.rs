//! Selection modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// How clicks and programmatic selection calls mutate the selection.
///
/// The mode is fixed when a controller is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one selected item; modifiers are ignored.
    #[default]
    Single,
    /// Multiple items via Ctrl (toggle) and Shift (range).
    Multi,
    /// Multiple items, every click toggles. No modifier distinction.
    Simple,
}

impl SelectionMode {
    /// Name used by `Display` and `FromStr`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
            SelectionMode::Simple => "simple",
        }
    }

    /// Check if more than one item can be selected at once.
    pub fn allows_multiple(&self) -> bool {
        !matches!(self, SelectionMode::Single)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "multi" => Ok(SelectionMode::Multi),
            "simple" => Ok(SelectionMode::Simple),
            _ => Err(SelectionError::UnknownMode(s.to_string())),
        }
    }
}
