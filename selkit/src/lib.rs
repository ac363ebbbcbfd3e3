//! Selection-state controller for list-like containers.
//!
//! A [`SelectionController`] tracks which items of a bound [`Container`] are
//! selected, translates interaction events into selection changes, and
//! notifies the container with one aggregated [`SelectionChangeEvent`] per
//! mutation batch.

pub mod config;
pub mod container;
pub mod controller;
pub mod error;
pub mod event;
pub mod hooks;
pub mod input;
pub mod items;
pub mod keynav;
pub mod list;
pub mod mode;

pub use config::{KeyNavConfig, SelectionConfig};
pub use container::{Container, Listener};
pub use controller::SelectionController;
pub use error::SelectionError;
pub use event::{ContainerEvent, EventKind, EventResult, ListenerId, SelectionChangeEvent};
pub use hooks::SelectionHooks;
pub use input::{Key, KeyCombo, Modifiers};
pub use items::Items;
pub use keynav::{KeyNav, NavDirection};
pub use list::ListContainer;
pub use mode::SelectionMode;

pub mod prelude {
    pub use crate::config::{KeyNavConfig, SelectionConfig};
    pub use crate::container::{Container, Listener};
    pub use crate::controller::SelectionController;
    pub use crate::event::{ContainerEvent, EventKind, EventResult, SelectionChangeEvent};
    pub use crate::hooks::SelectionHooks;
    pub use crate::input::{Key, KeyCombo, Modifiers};
    pub use crate::items::Items;
    pub use crate::list::ListContainer;
    pub use crate::mode::SelectionMode;
}
