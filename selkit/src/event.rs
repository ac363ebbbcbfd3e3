//! Container event types.
//!
//! Interaction events travel from a container to its subscribed listeners
//! as [`ContainerEvent`] values. Selection changes travel the other way, as
//! a [`SelectionChangeEvent`] fired on the container.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::input::{KeyCombo, Modifiers};

/// Identity a listener subscribes to container events under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    /// Allocate a fresh, process-unique id.
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__listener_{}", self.0)
    }
}

/// Kinds of events a container can deliver or emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DoubleClick,
    ContextMenu,
    Remove,
    /// Render completion. Subscribed to only while effects are deferred.
    Render,
    /// Key press on the focused container.
    KeyDown,
    /// Emitted by the controller, never consumed.
    SelectionChange,
}

/// An interaction event delivered by a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerEvent<I> {
    /// Primary click on an item (or on empty space when `item` is `None`).
    Click { item: Option<I>, modifiers: Modifiers },
    /// Double click on an item.
    DoubleClick { item: Option<I>, modifiers: Modifiers },
    /// Context menu requested over an item.
    ContextMenu { item: Option<I> },
    /// An item was removed from the container.
    Remove { item: I },
    /// The container finished rendering.
    Render,
    /// A key was pressed while the container had focus.
    Key { key: KeyCombo },
}

impl<I> ContainerEvent<I> {
    /// Create a click without modifiers.
    pub fn click(item: I) -> Self {
        Self::Click {
            item: Some(item),
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a click with modifiers.
    pub fn click_with(item: I, modifiers: Modifiers) -> Self {
        Self::Click {
            item: Some(item),
            modifiers,
        }
    }

    /// Create a key event.
    pub fn key(key: KeyCombo) -> Self {
        Self::Key { key }
    }

    /// The subscription kind this event is delivered under.
    pub fn kind(&self) -> EventKind {
        match self {
            ContainerEvent::Click { .. } => EventKind::Click,
            ContainerEvent::DoubleClick { .. } => EventKind::DoubleClick,
            ContainerEvent::ContextMenu { .. } => EventKind::ContextMenu,
            ContainerEvent::Remove { .. } => EventKind::Remove,
            ContainerEvent::Render => EventKind::Render,
            ContainerEvent::Key { .. } => EventKind::KeyDown,
        }
    }

    /// The item the event targets, if any.
    pub fn item(&self) -> Option<&I> {
        match self {
            ContainerEvent::Click { item, .. }
            | ContainerEvent::DoubleClick { item, .. }
            | ContainerEvent::ContextMenu { item } => item.as_ref(),
            ContainerEvent::Remove { item } => Some(item),
            ContainerEvent::Render | ContainerEvent::Key { .. } => None,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Aggregated notification fired after a selection mutation batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChangeEvent<I> {
    /// Snapshot of all selected items, in selection order.
    pub selected: Vec<I>,
}
