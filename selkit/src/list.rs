//! In-memory container.
//!
//! [`ListContainer`] is a ready-made [`Container`] for hosts that keep their
//! items in a `Vec`. It records subscriptions, per-item selection effects
//! and scroll requests so a host can render from them.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::container::{Container, Listener};
use crate::event::{ContainerEvent, EventKind, EventResult, ListenerId, SelectionChangeEvent};

type Observer<I> = Rc<dyn Fn(&SelectionChangeEvent<I>)>;

/// A `Vec`-backed container.
pub struct ListContainer<I> {
    items: RefCell<Vec<I>>,
    rendered: Cell<bool>,
    listeners: RefCell<Vec<(EventKind, ListenerId)>>,
    observers: RefCell<Vec<Observer<I>>>,
    effects: RefCell<Vec<(I, bool)>>,
    scrolled: RefCell<Vec<I>>,
}

impl<I> Default for ListContainer<I> {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            rendered: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            effects: RefCell::new(Vec::new()),
            scrolled: RefCell::new(Vec::new()),
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for ListContainer<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListContainer")
            .field("items", &self.items.borrow())
            .field("rendered", &self.rendered.get())
            .field("listeners", &self.listeners.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl<I: Clone + PartialEq> ListContainer<I> {
    /// Create an empty, unrendered container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unrendered container holding `items`.
    pub fn from_items(items: Vec<I>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Default::default()
        }
    }

    /// Create a container holding `items` that is already rendered.
    pub fn rendered(items: Vec<I>) -> Self {
        let list = Self::from_items(items);
        list.rendered.set(true);
        list
    }

    // -------------------------------------------------------------------------
    // Item mutation
    // -------------------------------------------------------------------------

    /// Push an item to the end.
    pub fn push(&self, item: I) {
        self.items.borrow_mut().push(item);
    }

    /// Insert an item at `index`, clamped to the end.
    pub fn insert(&self, index: usize, item: I) {
        let mut items = self.items.borrow_mut();
        let index = index.min(items.len());
        items.insert(index, item);
    }

    /// Remove the item at `index`.
    ///
    /// Returns the `Remove` event to dispatch to listeners.
    pub fn remove(&self, index: usize) -> Option<ContainerEvent<I>> {
        let mut items = self.items.borrow_mut();
        if index < items.len() {
            let item = items.remove(index);
            return Some(ContainerEvent::Remove { item });
        }
        None
    }

    /// Remove `item` if present.
    pub fn remove_item(&self, item: &I) -> Option<ContainerEvent<I>> {
        let index = self.items.borrow().iter().position(|i| i == item)?;
        self.remove(index)
    }

    /// Mark the container rendered.
    ///
    /// Returns the `Render` event to dispatch to listeners.
    pub fn render(&self) -> ContainerEvent<I> {
        self.rendered.set(true);
        ContainerEvent::Render
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Check if `listener` is subscribed to `kind`.
    pub fn is_listening(&self, kind: EventKind, listener: ListenerId) -> bool {
        self.listeners.borrow().contains(&(kind, listener))
    }

    /// Event kinds `listener` is subscribed to.
    pub fn subscriptions(&self, listener: ListenerId) -> Vec<EventKind> {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, id)| *id == listener)
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Deliver `event` to `listener` if it is subscribed to the event's kind.
    pub fn dispatch<L>(&self, listener: &mut L, event: &ContainerEvent<I>) -> EventResult
    where
        L: Listener<I> + ?Sized,
    {
        if !self.is_listening(event.kind(), listener.listener_id()) {
            trace!("{} not subscribed to {:?}", listener.listener_id(), event.kind());
            return EventResult::Ignored;
        }
        listener.handle_event(event)
    }

    /// Register a selection change observer.
    pub fn on_selection_change<F>(&self, observer: F)
    where
        F: Fn(&SelectionChangeEvent<I>) + 'static,
    {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    // -------------------------------------------------------------------------
    // Recorded effects
    // -------------------------------------------------------------------------

    /// Per-item selection effects applied so far, in order.
    pub fn effects(&self) -> Vec<(I, bool)> {
        self.effects.borrow().clone()
    }

    /// Drain the recorded per-item effects.
    pub fn take_effects(&self) -> Vec<(I, bool)> {
        std::mem::take(&mut *self.effects.borrow_mut())
    }

    /// Latest effect state of `item`, if any effect was applied to it.
    pub fn is_highlighted(&self, item: &I) -> Option<bool> {
        self.effects
            .borrow()
            .iter()
            .rev()
            .find(|(i, _)| i == item)
            .map(|(_, selected)| *selected)
    }

    /// Items passed to `scroll_into_view`, in order.
    pub fn scrolled(&self) -> Vec<I> {
        self.scrolled.borrow().clone()
    }
}

impl<I> Container for ListContainer<I>
where
    I: Clone + PartialEq + fmt::Debug,
{
    type Item = I;

    fn item_count(&self) -> usize {
        self.items.borrow().len()
    }

    fn item_at(&self, index: usize) -> Option<I> {
        self.items.borrow().get(index).cloned()
    }

    fn index_of(&self, item: &I) -> Option<usize> {
        self.items.borrow().iter().position(|i| i == item)
    }

    fn items(&self) -> Vec<I> {
        self.items.borrow().clone()
    }

    fn is_rendered(&self) -> bool {
        self.rendered.get()
    }

    fn add_listener(&self, kind: EventKind, listener: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.contains(&(kind, listener)) {
            listeners.push((kind, listener));
        }
    }

    fn remove_listener(&self, kind: EventKind, listener: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|entry| *entry != (kind, listener));
    }

    fn scroll_into_view(&self, item: &I) {
        self.scrolled.borrow_mut().push(item.clone());
    }

    fn fire_event(&self, kind: EventKind, event: &SelectionChangeEvent<I>) {
        if kind != EventKind::SelectionChange {
            return;
        }
        // Observers may register further observers while being notified.
        let observers: Vec<_> = self.observers.borrow().clone();
        for observer in observers {
            observer(event);
        }
    }

    fn on_select_change(&self, item: &I, selected: bool) {
        self.effects.borrow_mut().push((item.clone(), selected));
    }
}
