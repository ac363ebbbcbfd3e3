//! Strategy callbacks for interactions with no default selection behavior.

use std::fmt;

use crate::event::{ContainerEvent, EventResult};

/// A hook receives the event and a snapshot of the current selection.
pub type Hook<I> = Box<dyn FnMut(&ContainerEvent<I>, &[I]) -> EventResult>;

/// Callbacks for double-click and left/right key navigation.
///
/// Unset hooks ignore the event.
pub struct SelectionHooks<I> {
    on_double_click: Option<Hook<I>>,
    on_key_left: Option<Hook<I>>,
    on_key_right: Option<Hook<I>>,
}

impl<I> Default for SelectionHooks<I> {
    fn default() -> Self {
        Self {
            on_double_click: None,
            on_key_left: None,
            on_key_right: None,
        }
    }
}

impl<I> fmt::Debug for SelectionHooks<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionHooks")
            .field("on_double_click", &self.on_double_click.is_some())
            .field("on_key_left", &self.on_key_left.is_some())
            .field("on_key_right", &self.on_key_right.is_some())
            .finish()
    }
}

impl<I> SelectionHooks<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the double-click hook.
    pub fn on_double_click<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ContainerEvent<I>, &[I]) -> EventResult + 'static,
    {
        self.on_double_click = Some(Box::new(hook));
        self
    }

    /// Set the left-key hook.
    pub fn on_key_left<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ContainerEvent<I>, &[I]) -> EventResult + 'static,
    {
        self.on_key_left = Some(Box::new(hook));
        self
    }

    /// Set the right-key hook.
    pub fn on_key_right<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ContainerEvent<I>, &[I]) -> EventResult + 'static,
    {
        self.on_key_right = Some(Box::new(hook));
        self
    }

    pub(crate) fn double_click(&mut self, event: &ContainerEvent<I>, selected: &[I]) -> EventResult {
        run(&mut self.on_double_click, event, selected)
    }

    pub(crate) fn key_left(&mut self, event: &ContainerEvent<I>, selected: &[I]) -> EventResult {
        run(&mut self.on_key_left, event, selected)
    }

    pub(crate) fn key_right(&mut self, event: &ContainerEvent<I>, selected: &[I]) -> EventResult {
        run(&mut self.on_key_right, event, selected)
    }
}

fn run<I>(hook: &mut Option<Hook<I>>, event: &ContainerEvent<I>, selected: &[I]) -> EventResult {
    match hook {
        Some(hook) => hook(event, selected),
        None => EventResult::Ignored,
    }
}
