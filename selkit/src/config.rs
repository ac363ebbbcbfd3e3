//! Controller configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::input::KeyCombo;
use crate::keynav::{NavDirection, arrow_bindings, vim_bindings};
use crate::mode::SelectionMode;

/// Configuration for a [`SelectionController`](crate::SelectionController).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Selection mode, fixed for the controller's lifetime.
    pub mode: SelectionMode,

    /// Keyboard navigation bindings.
    pub key_nav: KeyNavConfig,
}

impl SelectionConfig {
    /// Create a config with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the keyboard navigation config.
    pub fn key_nav(mut self, key_nav: KeyNavConfig) -> Self {
        self.key_nav = key_nav;
        self
    }

    /// Check that no key is bound to two directions.
    pub fn validate(&self) -> Result<(), SelectionError> {
        let mut seen: HashMap<KeyCombo, NavDirection> = HashMap::new();
        for (key, direction) in self.key_nav.bindings() {
            match seen.get(&key) {
                Some(&first) if first != direction => {
                    return Err(SelectionError::ConflictingKeyBinding {
                        key,
                        first,
                        second: direction,
                    });
                }
                _ => {
                    seen.insert(key, direction);
                }
            }
        }
        Ok(())
    }
}

/// Which keys move the selection.
///
/// Arrow keys are always bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyNavConfig {
    /// Also navigate with `h j k l`.
    pub vim_keys: bool,

    /// Extra bindings on top of the defaults.
    pub extra: Vec<(KeyCombo, NavDirection)>,
}

impl KeyNavConfig {
    /// Enable or disable vim-style keys.
    pub fn vim_keys(mut self, enabled: bool) -> Self {
        self.vim_keys = enabled;
        self
    }

    /// Add an extra binding.
    pub fn bind(mut self, key: KeyCombo, direction: NavDirection) -> Self {
        self.extra.push((key, direction));
        self
    }

    /// All bindings, defaults first.
    pub fn bindings(&self) -> Vec<(KeyCombo, NavDirection)> {
        let mut bindings: Vec<_> = arrow_bindings().to_vec();
        if self.vim_keys {
            bindings.extend(vim_bindings());
        }
        bindings.extend(self.extra.iter().copied());
        bindings
    }
}
