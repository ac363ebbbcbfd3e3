//! The selection controller.
//!
//! [`SelectionController`] owns the selection state of one bound container.
//! Interaction events arrive through [`Listener::handle_event`]; programmatic
//! callers use the `select*` / `deselect*` methods. Both paths share one
//! mutation core, which applies per-item effects through
//! [`Container::on_select_change`] and then fires a single aggregated
//! [`SelectionChangeEvent`] when the selection actually changed.
//!
//! # Pre-render deferral
//!
//! Until the container reports [`Container::is_rendered`], per-item effects
//! are buffered instead of applied. The first buffered effect subscribes the
//! controller to [`EventKind::Render`]; the render event applies the buffer
//! in order, exactly once, and drops the subscription.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use selkit::prelude::*;
//!
//! let list = Rc::new(ListContainer::rendered(vec!["a", "b", "c"]));
//! let mut selection = SelectionController::new(SelectionMode::Multi);
//! selection.bind(Some(&list));
//!
//! list.dispatch(&mut selection, &ContainerEvent::click("a"));
//! list.dispatch(&mut selection, &ContainerEvent::click_with("c", Modifiers::SHIFT));
//! assert_eq!(selection.selected_items(), vec!["a", "b", "c"]);
//! ```

use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::config::{KeyNavConfig, SelectionConfig};
use crate::container::{Container, Listener};
use crate::event::{ContainerEvent, EventKind, EventResult, ListenerId, SelectionChangeEvent};
use crate::hooks::SelectionHooks;
use crate::input::Modifiers;
use crate::items::Items;
use crate::keynav::{KeyNav, NavDirection};
use crate::mode::SelectionMode;

/// Interaction kinds the controller subscribes to on bind.
const LISTENED: [EventKind; 4] = [
    EventKind::Click,
    EventKind::DoubleClick,
    EventKind::Remove,
    EventKind::ContextMenu,
];

/// Selection state and interaction handling for one container.
pub struct SelectionController<C: Container> {
    id: ListenerId,
    mode: SelectionMode,
    key_nav_config: KeyNavConfig,
    /// Selected items in selection order, no duplicates.
    selected: Vec<C::Item>,
    /// Anchor for range selection and the single-selection value.
    primary: Option<C::Item>,
    /// Items whose selected effect waits for the first render.
    pending: Option<Vec<C::Item>>,
    container: Option<Weak<C>>,
    key_nav: Option<KeyNav<C>>,
    hooks: SelectionHooks<C::Item>,
}

impl<C: Container> std::fmt::Debug for SelectionController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .field("primary", &self.primary)
            .field("pending", &self.pending)
            .field("bound", &self.container().is_some())
            .field("key_nav", &self.key_nav)
            .field("hooks", &self.hooks)
            .finish()
    }
}

impl<C: Container> Default for SelectionController<C> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl<C: Container> SelectionController<C> {
    /// Create an unbound controller.
    pub fn new(mode: SelectionMode) -> Self {
        Self::with_config(SelectionConfig::new(mode))
    }

    /// Create an unbound controller from a config.
    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            id: ListenerId::new(),
            mode: config.mode,
            key_nav_config: config.key_nav,
            selected: Vec::new(),
            primary: None,
            pending: None,
            container: None,
            key_nav: None,
            hooks: SelectionHooks::default(),
        }
    }

    /// Install double-click and left/right key hooks.
    pub fn with_hooks(mut self, hooks: SelectionHooks<C::Item>) -> Self {
        self.hooks = hooks;
        self
    }

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// The id this controller subscribes to container events under.
    pub fn listener_id(&self) -> ListenerId {
        self.id
    }

    fn container(&self) -> Option<Rc<C>> {
        self.container.as_ref().and_then(Weak::upgrade)
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// Bind to `container`, or only unbind when `None`.
    ///
    /// Rebinding deselects everything on the previous container without a
    /// notification and detaches every subscription from it.
    /// Binding the already-bound container does nothing.
    pub fn bind(&mut self, container: Option<&Rc<C>>) {
        if self.key_nav.is_none() {
            self.key_nav = Some(KeyNav::new(&self.key_nav_config));
        }

        let same = match (&self.container, container) {
            (Some(old), Some(new)) => std::ptr::eq(old.as_ptr(), Rc::as_ptr(new)),
            (None, None) => true,
            _ => false,
        };
        if same {
            trace!("{} already bound", self.id);
            return;
        }

        if let Some(old) = self.container.take() {
            if let Some(old) = old.upgrade() {
                // Leave nothing highlighted on the container we are leaving.
                self.clear(&old, true);
                for kind in LISTENED {
                    old.remove_listener(kind, self.id);
                }
                if self.pending.is_some() {
                    old.remove_listener(EventKind::Render, self.id);
                }
            }
            self.selected.clear();
            self.primary = None;
            self.pending = None;
            debug!("{} unbound from previous container", self.id);
        }

        if let Some(nav) = self.key_nav.as_mut() {
            nav.bind(container, self.id);
        }

        if let Some(container) = container {
            for kind in LISTENED {
                container.add_listener(kind, self.id);
            }
            self.container = Some(Rc::downgrade(container));
            debug!(
                "{} bound ({} mode, {} items)",
                self.id,
                self.mode,
                container.item_count()
            );
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Check if `item` is selected.
    pub fn is_selected(&self, item: &C::Item) -> bool {
        self.selected.contains(item)
    }

    /// The primary item: the last selected item, or the range anchor.
    pub fn selected_item(&self) -> Option<C::Item> {
        self.primary.clone()
    }

    /// All selected items, in selection order.
    pub fn selected_items(&self) -> Vec<C::Item> {
        self.selected.clone()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check if selection effects are waiting for the container to render.
    pub fn has_pending_render(&self) -> bool {
        self.pending.is_some()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select `item`, replacing the current selection.
    pub fn select(&mut self, item: C::Item) {
        self.do_select(Items::Item(item), false, false);
    }

    /// Select the item at `index`, replacing the current selection.
    pub fn select_index(&mut self, index: usize) {
        if let Some(item) = self.container().and_then(|c| c.item_at(index)) {
            self.select(item);
        }
    }

    /// Select the items in `start..end`, replacing the current selection.
    ///
    /// Single mode selects only `start`.
    pub fn select_range(&mut self, start: usize, end: usize) {
        match self.mode {
            SelectionMode::Single => self.do_select(Items::Index(start), false, false),
            _ => self.do_select(Items::Range(start..end), false, false),
        }
    }

    /// Select `items`, replacing the current selection.
    ///
    /// Single mode selects only the first item.
    pub fn select_items(&mut self, items: Vec<C::Item>) {
        match self.mode {
            SelectionMode::Single => {
                if let Some(first) = items.into_iter().next() {
                    self.select(first);
                }
            }
            _ => self.do_select(Items::List(items), false, false),
        }
    }

    /// Select every item. Single mode selects the first item.
    pub fn select_all(&mut self) {
        match self.mode {
            SelectionMode::Single => self.do_select(Items::Index(0), false, false),
            _ => {
                let count = self.container().map_or(0, |c| c.item_count());
                self.do_select(Items::Range(0..count), false, false);
            }
        }
    }

    /// Select with full control over keeping the existing selection and
    /// suppressing the change notification.
    pub fn select_with(&mut self, items: Items<C::Item>, keep_existing: bool, suppress_event: bool) {
        self.do_select(items, keep_existing, suppress_event);
    }

    // -------------------------------------------------------------------------
    // Deselection
    // -------------------------------------------------------------------------

    /// Deselect `item`.
    ///
    /// Single mode only acts when `item` is the selected item.
    pub fn deselect(&mut self, item: C::Item) {
        match self.mode {
            SelectionMode::Single => {
                if self.primary.as_ref() == Some(&item) {
                    self.deselect_all();
                }
            }
            _ => self.do_deselect(Items::Item(item)),
        }
    }

    /// Deselect the item at `index`.
    pub fn deselect_index(&mut self, index: usize) {
        if let Some(item) = self.container().and_then(|c| c.item_at(index)) {
            self.deselect(item);
        }
    }

    /// Deselect the items in `start..end`.
    pub fn deselect_range(&mut self, start: usize, end: usize) {
        self.do_deselect(Items::Range(start..end));
    }

    /// Deselect `items`.
    pub fn deselect_list(&mut self, items: Vec<C::Item>) {
        self.do_deselect(Items::List(items));
    }

    /// Deselect whatever `items` resolves to.
    pub fn deselect_items(&mut self, items: Items<C::Item>) {
        self.do_deselect(items);
    }

    /// Deselect everything.
    pub fn deselect_all(&mut self) {
        match (self.mode, self.primary.clone()) {
            (SelectionMode::Single, Some(primary)) => self.do_deselect(Items::Item(primary)),
            _ => self.deselect_all_with(false),
        }
    }

    /// Deselect everything, optionally without a change notification.
    pub fn deselect_all_with(&mut self, suppress_event: bool) {
        if let Some(container) = self.container() {
            self.clear(&container, suppress_event);
        }
    }

    /// Re-apply the selection effect of every container item.
    ///
    /// Selected items get `true`, all others `false`. The selection itself
    /// is untouched.
    pub fn refresh(&mut self) {
        let Some(container) = self.container() else {
            return;
        };
        for item in container.items() {
            let selected = self.selected.contains(&item);
            self.on_select_change(&container, &item, selected);
        }
    }

    // -------------------------------------------------------------------------
    // Mutation core
    // -------------------------------------------------------------------------

    fn do_select(&mut self, items: Items<C::Item>, keep_existing: bool, suppress_event: bool) {
        let Some(container) = self.container() else {
            return;
        };
        // Only items the container currently holds can become selected.
        let held = |item: &C::Item| container.index_of(item).is_some();
        let targets: Vec<C::Item> = if items.is_single() || !self.mode.allows_multiple() {
            items.item(&*container).filter(held).into_iter().collect()
        } else {
            items.resolve(&*container).into_iter().filter(held).collect()
        };
        if targets.is_empty() {
            trace!("{} nothing to select", self.id);
            return;
        }

        let before = self.selected.clone();
        if !keep_existing || !self.mode.allows_multiple() {
            self.clear(&container, true);
        }
        for item in targets {
            self.select_one(&container, item);
        }

        if !suppress_event && self.selected != before {
            self.fire_selection_changed(&container);
        }
    }

    fn select_one(&mut self, container: &C, item: C::Item) {
        self.on_select_change(container, &item, true);
        if !self.selected.contains(&item) {
            self.selected.push(item.clone());
        }
        self.primary = Some(item);
    }

    fn do_deselect(&mut self, items: Items<C::Item>) {
        let Some(container) = self.container() else {
            return;
        };
        let mut changed = false;
        for item in items.resolve(&*container) {
            if let Some(pos) = self.selected.iter().position(|s| *s == item) {
                changed = true;
                self.on_select_change(&container, &item, false);
                self.selected.remove(pos);
                if self.primary.as_ref() == Some(&item) {
                    self.primary = None;
                }
            }
        }
        if changed {
            self.fire_selection_changed(&container);
        }
    }

    fn clear(&mut self, container: &C, suppress_event: bool) {
        let removed = std::mem::take(&mut self.selected);
        for item in &removed {
            self.on_select_change(container, item, false);
        }
        self.primary = None;
        if !removed.is_empty() && !suppress_event {
            self.fire_selection_changed(container);
        }
    }

    fn on_select_change(&mut self, container: &C, item: &C::Item, selected: bool) {
        if !container.is_rendered() {
            self.defer(container, item, selected);
            return;
        }
        // Rendered before the render event reached us: keep the buffer from
        // applying a stale effect later.
        if let Some(pending) = self.pending.as_mut() {
            pending.retain(|p| p != item);
            if pending.is_empty() {
                self.pending = None;
                container.remove_listener(EventKind::Render, self.id);
                debug!("{} deferred effects superseded", self.id);
            }
        }
        trace!("{} effect {:?} -> {}", self.id, item, selected);
        container.on_select_change(item, selected);
    }

    fn defer(&mut self, container: &C, item: &C::Item, selected: bool) {
        let id = self.id;
        let pending = self.pending.get_or_insert_with(|| {
            container.add_listener(EventKind::Render, id);
            debug!("{} deferring selection effects until render", id);
            Vec::new()
        });
        if selected {
            if !pending.contains(item) {
                pending.push(item.clone());
            }
        } else {
            pending.retain(|p| p != item);
        }
    }

    fn fire_selection_changed(&self, container: &C) {
        debug!("{} selection changed: {} selected", self.id, self.selected.len());
        let event = SelectionChangeEvent {
            selected: self.selected.clone(),
        };
        container.fire_event(EventKind::SelectionChange, &event);
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    fn on_click(&mut self, item: C::Item, modifiers: Modifiers) {
        match self.mode {
            SelectionMode::Simple => {
                if self.is_selected(&item) {
                    self.deselect(item);
                } else {
                    self.do_select(Items::Item(item), true, false);
                }
            }
            SelectionMode::Single => {
                if modifiers.ctrl && self.is_selected(&item) {
                    self.deselect(item);
                } else {
                    self.do_select(Items::Item(item), false, false);
                }
            }
            SelectionMode::Multi => self.on_multi_click(item, modifiers),
        }
    }

    fn on_multi_click(&mut self, item: C::Item, modifiers: Modifiers) {
        let Some(container) = self.container() else {
            return;
        };
        let Some(index) = container.index_of(&item) else {
            return;
        };
        let anchor = if modifiers.shift {
            self.primary.as_ref().and_then(|p| container.index_of(p))
        } else {
            None
        };

        if let Some(last) = anchor {
            let (a, b) = if last > index { (index, last) } else { (last, index) };
            self.do_select(Items::Range(a..b + 1), modifiers.ctrl, false);
            // The anchor stays where it was, not at the clicked item.
            self.primary = container.item_at(last);
        } else if modifiers.ctrl && self.is_selected(&item) {
            self.deselect(item);
        } else {
            self.do_select(Items::Index(index), modifiers.ctrl, false);
        }
    }

    fn on_context_menu(&mut self, item: C::Item) {
        if self.selected.len() > 1 && self.is_selected(&item) {
            return;
        }
        self.select(item);
    }

    fn on_remove(&mut self, item: C::Item) {
        if self.is_selected(&item) {
            self.deselect(item);
        }
    }

    fn on_render(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let Some(container) = self.container() else {
            return;
        };
        container.remove_listener(EventKind::Render, self.id);
        debug!("{} applying {} deferred effects", self.id, pending.len());
        for item in &pending {
            container.on_select_change(item, true);
        }
    }

    /// Select the neighbour of the primary item exclusively.
    fn on_key_move(&mut self, forward: bool) -> EventResult {
        let Some(container) = self.container() else {
            return EventResult::Ignored;
        };
        let Some(index) = self.primary.as_ref().and_then(|p| container.index_of(p)) else {
            return EventResult::Ignored;
        };
        let next = if forward {
            (index + 1 < container.item_count())
                .then(|| container.item_at(index + 1))
                .flatten()
        } else {
            index.checked_sub(1).and_then(|i| container.item_at(i))
        };
        match next {
            Some(item) => {
                self.do_select(Items::Item(item.clone()), false, false);
                container.scroll_into_view(&item);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}

impl<C: Container> Listener<C::Item> for SelectionController<C> {
    fn listener_id(&self) -> ListenerId {
        self.id
    }

    fn handle_event(&mut self, event: &ContainerEvent<C::Item>) -> EventResult {
        trace!("{} handling {:?}", self.id, event.kind());
        match event {
            ContainerEvent::Click { item, modifiers } => {
                if let Some(item) = item {
                    self.on_click(item.clone(), *modifiers);
                }
                EventResult::Ignored
            }
            ContainerEvent::DoubleClick { .. } => self.hooks.double_click(event, &self.selected),
            ContainerEvent::ContextMenu { item } => {
                if let Some(item) = item {
                    self.on_context_menu(item.clone());
                }
                EventResult::Ignored
            }
            ContainerEvent::Remove { item } => {
                self.on_remove(item.clone());
                EventResult::Ignored
            }
            ContainerEvent::Render => {
                self.on_render();
                EventResult::Ignored
            }
            ContainerEvent::Key { key } => {
                let direction = self.key_nav.as_ref().and_then(|nav| nav.direction(key));
                match direction {
                    Some(NavDirection::Down) => self.on_key_move(true),
                    Some(NavDirection::Up) => self.on_key_move(false),
                    Some(NavDirection::Left) => self.hooks.key_left(event, &self.selected),
                    Some(NavDirection::Right) => self.hooks.key_right(event, &self.selected),
                    None => EventResult::Ignored,
                }
            }
        }
    }
}
