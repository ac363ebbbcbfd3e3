//! Item range descriptors.

use std::ops::Range;

use crate::container::Container;

/// A transient description of which items an operation targets.
///
/// Descriptors are resolved against the live container at the moment of
/// use, never earlier, so they stay correct if the container changes in
/// between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Items<I> {
    /// The item at an index.
    Index(usize),
    /// A specific item.
    Item(I),
    /// The items in an index range, end exclusive.
    Range(Range<usize>),
    /// An explicit list of items.
    List(Vec<I>),
}

impl<I: Clone> Items<I> {
    /// Check if the descriptor names a single item.
    pub fn is_single(&self) -> bool {
        matches!(self, Items::Index(_) | Items::Item(_))
    }

    /// Resolve a single-item descriptor.
    ///
    /// Multi-item descriptors resolve to their first item.
    pub fn item<C>(&self, container: &C) -> Option<I>
    where
        C: Container<Item = I> + ?Sized,
    {
        match self {
            Items::Index(index) => container.item_at(*index),
            Items::Item(item) => Some(item.clone()),
            Items::Range(range) => range.clone().find_map(|i| container.item_at(i)),
            Items::List(items) => items.first().cloned(),
        }
    }

    /// Resolve every item the descriptor names.
    ///
    /// Out-of-range indices are skipped. `Item` and `List` entries are
    /// returned as given, whether or not the container still holds them.
    pub fn resolve<C>(&self, container: &C) -> Vec<I>
    where
        C: Container<Item = I> + ?Sized,
    {
        match self {
            Items::Index(index) => container.item_at(*index).into_iter().collect(),
            Items::Item(item) => vec![item.clone()],
            Items::Range(range) => range.clone().filter_map(|i| container.item_at(i)).collect(),
            Items::List(items) => items.clone(),
        }
    }
}

impl<I> From<Range<usize>> for Items<I> {
    fn from(range: Range<usize>) -> Self {
        Items::Range(range)
    }
}

impl<I> From<Vec<I>> for Items<I> {
    fn from(items: Vec<I>) -> Self {
        Items::List(items)
    }
}
