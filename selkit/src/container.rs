//! The collaborator interfaces a selection controller is bound to.

use std::fmt::Debug;

use crate::event::{ContainerEvent, EventKind, EventResult, ListenerId, SelectionChangeEvent};

/// An ordered collection of selectable items.
///
/// Implementors are shared through `Rc` and mutate through interior
/// mutability, so every method takes `&self`. Items are identity keys:
/// two items are the same item iff they compare equal.
pub trait Container {
    /// The item identity type.
    type Item: Clone + PartialEq + Debug;

    /// Number of items.
    fn item_count(&self) -> usize;

    /// Item at `index`, or `None` when out of range.
    fn item_at(&self, index: usize) -> Option<Self::Item>;

    /// Position of `item`, or `None` when it is not in the container.
    fn index_of(&self, item: &Self::Item) -> Option<usize>;

    /// All items in container order.
    fn items(&self) -> Vec<Self::Item>;

    /// Whether the container has completed its first render.
    fn is_rendered(&self) -> bool;

    /// Subscribe `listener` to events of `kind`.
    fn add_listener(&self, kind: EventKind, listener: ListenerId);

    /// Drop the subscription of `listener` to events of `kind`.
    fn remove_listener(&self, kind: EventKind, listener: ListenerId);

    /// Bring `item` into view. Best effort.
    fn scroll_into_view(&self, item: &Self::Item);

    /// Emit a selection notification to the container's observers.
    fn fire_event(&self, kind: EventKind, event: &SelectionChangeEvent<Self::Item>);

    /// Apply the visual effect of `item` becoming (de)selected.
    ///
    /// Only called once the container is rendered.
    fn on_select_change(&self, _item: &Self::Item, _selected: bool) {}
}

/// Something that receives container events it subscribed to.
pub trait Listener<I> {
    /// The id used in `add_listener` / `remove_listener` calls.
    fn listener_id(&self) -> ListenerId;

    /// Handle a delivered event.
    fn handle_event(&mut self, event: &ContainerEvent<I>) -> EventResult;
}
