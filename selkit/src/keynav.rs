//! Arrow-key navigation routing.

use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::KeyNavConfig;
use crate::container::Container;
use crate::event::{EventKind, ListenerId};
use crate::input::{Key, KeyCombo};

/// Direction a navigation key moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Routes key presses on a bound container to navigation directions.
pub struct KeyNav<C: Container> {
    bindings: HashMap<KeyCombo, NavDirection>,
    container: Option<Weak<C>>,
    listener: Option<ListenerId>,
}

impl<C: Container> fmt::Debug for KeyNav<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyNav")
            .field("bindings", &self.bindings.len())
            .field("bound", &self.is_bound())
            .field("listener", &self.listener)
            .finish()
    }
}

impl<C: Container> KeyNav<C> {
    /// Create an unbound navigator with the configured key map.
    pub fn new(config: &KeyNavConfig) -> Self {
        Self {
            bindings: config.bindings().into_iter().collect(),
            container: None,
            listener: None,
        }
    }

    /// Bind to `container`, or only unbind when `None`.
    ///
    /// Key presses are subscribed under `listener`.
    pub fn bind(&mut self, container: Option<&Rc<C>>, listener: ListenerId) {
        if let (Some(old), Some(id)) = (self.container.take(), self.listener.take())
            && let Some(old) = old.upgrade()
        {
            old.remove_listener(EventKind::KeyDown, id);
            debug!("KeyNav {} unbound", id);
        }
        if let Some(container) = container {
            container.add_listener(EventKind::KeyDown, listener);
            self.container = Some(Rc::downgrade(container));
            self.listener = Some(listener);
            debug!("KeyNav {} bound", listener);
        }
    }

    /// Check if a live container is bound.
    pub fn is_bound(&self) -> bool {
        self.container
            .as_ref()
            .is_some_and(|c| c.strong_count() > 0)
    }

    /// Direction `key` navigates in, if it is a navigation key.
    ///
    /// An unbound navigator routes nothing.
    pub fn direction(&self, key: &KeyCombo) -> Option<NavDirection> {
        if !self.is_bound() {
            return None;
        }
        self.bindings.get(key).copied()
    }
}

/// Arrow keys without modifiers.
pub(crate) fn arrow_bindings() -> [(KeyCombo, NavDirection); 4] {
    [
        (KeyCombo::key(Key::Up), NavDirection::Up),
        (KeyCombo::key(Key::Down), NavDirection::Down),
        (KeyCombo::key(Key::Left), NavDirection::Left),
        (KeyCombo::key(Key::Right), NavDirection::Right),
    ]
}

/// `h j k l` without modifiers.
pub(crate) fn vim_bindings() -> [(KeyCombo, NavDirection); 4] {
    [
        (KeyCombo::key(Key::Char('k')), NavDirection::Up),
        (KeyCombo::key(Key::Char('j')), NavDirection::Down),
        (KeyCombo::key(Key::Char('h')), NavDirection::Left),
        (KeyCombo::key(Key::Char('l')), NavDirection::Right),
    ]
}
