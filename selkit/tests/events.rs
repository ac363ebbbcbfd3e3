//! Interaction event handling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use selkit::{
    ContainerEvent, EventResult, Key, KeyCombo, KeyNavConfig, ListContainer, Modifiers,
    SelectionConfig, SelectionController, SelectionHooks, SelectionMode,
};

type Notifications = Rc<RefCell<Vec<Vec<u32>>>>;

fn items(n: u32) -> Vec<u32> {
    (0..n).map(|i| 100 + i).collect()
}

fn setup(
    mode: SelectionMode,
    n: u32,
) -> (
    Rc<ListContainer<u32>>,
    SelectionController<ListContainer<u32>>,
    Notifications,
) {
    let list = Rc::new(ListContainer::rendered(items(n)));
    let notifications: Notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = notifications.clone();
    list.on_selection_change(move |event| sink.borrow_mut().push(event.selected.clone()));

    let mut selection = SelectionController::new(mode);
    selection.bind(Some(&list));
    (list, selection, notifications)
}

fn click(
    list: &ListContainer<u32>,
    selection: &mut SelectionController<ListContainer<u32>>,
    item: u32,
    modifiers: Modifiers,
) {
    list.dispatch(selection, &ContainerEvent::click_with(item, modifiers));
}

fn key(
    list: &ListContainer<u32>,
    selection: &mut SelectionController<ListContainer<u32>>,
    key: Key,
) -> EventResult {
    list.dispatch(selection, &ContainerEvent::key(KeyCombo::key(key)))
}

// ============================================================================
// Click: Multi
// ============================================================================

#[test]
fn test_multi_plain_click_replaces() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 5);
    click(&list, &mut selection, 100, Modifiers::NONE);
    click(&list, &mut selection, 101, Modifiers::NONE);
    assert_eq!(selection.selected_items(), vec![101]);
}

#[test]
fn test_multi_shift_click_selects_inclusive_range() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 10);
    selection.select_index(2);
    click(&list, &mut selection, 105, Modifiers::SHIFT);
    assert_eq!(selection.selected_items(), vec![102, 103, 104, 105]);
    // The anchor stays at the originally selected item.
    assert_eq!(selection.selected_item(), Some(102));
}

#[test]
fn test_multi_shift_click_backwards() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 10);
    selection.select_index(6);
    click(&list, &mut selection, 103, Modifiers::SHIFT);
    assert_eq!(selection.selected_items(), vec![103, 104, 105, 106]);
    assert_eq!(selection.selected_item(), Some(106));
}

#[test]
fn test_multi_shift_extension_keeps_anchor() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 10);
    selection.select_index(4);
    click(&list, &mut selection, 107, Modifiers::SHIFT);
    click(&list, &mut selection, 102, Modifiers::SHIFT);
    assert_eq!(selection.selected_items(), vec![102, 103, 104]);
}

#[test]
fn test_multi_shift_without_anchor_selects_clicked() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 5);
    click(&list, &mut selection, 103, Modifiers::SHIFT);
    assert_eq!(selection.selected_items(), vec![103]);
}

#[test]
fn test_multi_ctrl_shift_keeps_outside_range() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 10);
    click(&list, &mut selection, 100, Modifiers::NONE);
    click(&list, &mut selection, 108, Modifiers::CTRL);
    click(&list, &mut selection, 105, Modifiers::CTRL_SHIFT);
    assert_eq!(selection.selected_items(), vec![100, 108, 105, 106, 107]);
    assert_eq!(selection.selected_item(), Some(108));
}

#[test]
fn test_multi_ctrl_click_toggles() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 5);
    click(&list, &mut selection, 100, Modifiers::NONE);
    click(&list, &mut selection, 102, Modifiers::CTRL);
    assert_eq!(selection.selected_items(), vec![100, 102]);

    click(&list, &mut selection, 100, Modifiers::CTRL);
    assert_eq!(selection.selected_items(), vec![102]);
    assert_eq!(notifications.borrow().len(), 3);
}

#[test]
fn test_click_on_empty_space_is_ignored() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 3);
    let result = list.dispatch(
        &mut selection,
        &ContainerEvent::Click {
            item: None,
            modifiers: Modifiers::NONE,
        },
    );
    assert_eq!(result, EventResult::Ignored);
    assert!(notifications.borrow().is_empty());
}

// ============================================================================
// Click: Single and Simple
// ============================================================================

#[test]
fn test_single_click_replaces_and_ignores_shift() {
    let (list, mut selection, _) = setup(SelectionMode::Single, 5);
    click(&list, &mut selection, 101, Modifiers::NONE);
    click(&list, &mut selection, 104, Modifiers::SHIFT);
    assert_eq!(selection.selected_items(), vec![104]);
    click(&list, &mut selection, 102, Modifiers::CTRL);
    assert_eq!(selection.selected_items(), vec![102]);
}

#[test]
fn test_single_ctrl_click_on_selected_deselects() {
    let (list, mut selection, _) = setup(SelectionMode::Single, 3);
    click(&list, &mut selection, 101, Modifiers::NONE);
    click(&list, &mut selection, 101, Modifiers::CTRL);
    assert!(selection.is_empty());
    assert_eq!(selection.selected_item(), None);
}

#[test]
fn test_simple_click_toggles_without_clearing() {
    let (list, mut selection, notifications) = setup(SelectionMode::Simple, 5);
    click(&list, &mut selection, 100, Modifiers::NONE);
    click(&list, &mut selection, 103, Modifiers::NONE);
    assert_eq!(selection.selected_items(), vec![100, 103]);

    click(&list, &mut selection, 100, Modifiers::NONE);
    assert_eq!(selection.selected_items(), vec![103]);
    assert_eq!(notifications.borrow().len(), 3);
}

#[test]
fn test_simple_click_ignores_modifiers() {
    let (list, mut selection, _) = setup(SelectionMode::Simple, 6);
    click(&list, &mut selection, 100, Modifiers::NONE);
    click(&list, &mut selection, 104, Modifiers::SHIFT);
    assert_eq!(selection.selected_items(), vec![100, 104]);
}

// ============================================================================
// Context menu
// ============================================================================

#[test]
fn test_context_menu_keeps_multi_selection() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 5);
    selection.select_items(vec![101, 102, 103]);
    notifications.borrow_mut().clear();

    list.dispatch(&mut selection, &ContainerEvent::ContextMenu { item: Some(102) });
    assert_eq!(selection.selected_items(), vec![101, 102, 103]);
    assert!(notifications.borrow().is_empty());
}

#[test]
fn test_context_menu_outside_selection_selects_target() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 5);
    selection.select_items(vec![101, 102]);
    list.dispatch(&mut selection, &ContainerEvent::ContextMenu { item: Some(104) });
    assert_eq!(selection.selected_items(), vec![104]);
}

#[test]
fn test_context_menu_on_sole_selection_keeps_it() {
    let (list, mut selection, _) = setup(SelectionMode::Single, 3);
    selection.select(101);
    list.dispatch(&mut selection, &ContainerEvent::ContextMenu { item: Some(101) });
    assert_eq!(selection.selected_items(), vec![101]);
}

#[test]
fn test_context_menu_on_removed_item_keeps_selection() {
    let (list, mut selection, notifications) = setup(SelectionMode::Single, 3);
    selection.select(101);
    list.remove(0);
    notifications.borrow_mut().clear();

    list.dispatch(&mut selection, &ContainerEvent::ContextMenu { item: Some(100) });
    assert_eq!(selection.selected_items(), vec![101]);
    assert!(notifications.borrow().is_empty());
}

#[test]
fn test_click_on_removed_item_keeps_selection() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 4);
    selection.select_items(vec![101, 102]);
    list.remove(3);
    notifications.borrow_mut().clear();

    click(&list, &mut selection, 103, Modifiers::NONE);
    assert_eq!(selection.selected_items(), vec![101, 102]);
    assert!(notifications.borrow().is_empty());
}

// ============================================================================
// Remove
// ============================================================================

#[test]
fn test_remove_selected_item_deselects_once() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 5);
    selection.select_items(vec![101, 102]);
    notifications.borrow_mut().clear();

    let event = list.remove(1).expect("index in range");
    list.dispatch(&mut selection, &event);
    assert_eq!(selection.selected_items(), vec![102]);
    assert!(!selection.is_selected(&101));
    assert_eq!(notifications.borrow().as_slice(), &[vec![102]]);
}

#[test]
fn test_remove_selected_item_single_mode() {
    let (list, mut selection, notifications) = setup(SelectionMode::Single, 3);
    selection.select(102);
    notifications.borrow_mut().clear();

    let event = list.remove_item(&102).expect("item present");
    list.dispatch(&mut selection, &event);
    assert!(selection.is_empty());
    assert_eq!(selection.selected_item(), None);
    assert_eq!(notifications.borrow().len(), 1);
}

#[test]
fn test_remove_unselected_item_is_silent() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 5);
    selection.select(100);
    notifications.borrow_mut().clear();

    let event = list.remove(3).expect("index in range");
    list.dispatch(&mut selection, &event);
    assert_eq!(selection.selected_items(), vec![100]);
    assert!(notifications.borrow().is_empty());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_key_down_moves_selection() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 4);
    selection.select_items(vec![100, 101]);

    assert_eq!(key(&list, &mut selection, Key::Down), EventResult::Consumed);
    assert_eq!(selection.selected_items(), vec![102]);
    assert_eq!(list.scrolled(), vec![102]);
}

#[test]
fn test_key_up_moves_selection() {
    let (list, mut selection, _) = setup(SelectionMode::Single, 4);
    selection.select(102);

    assert_eq!(key(&list, &mut selection, Key::Up), EventResult::Consumed);
    assert_eq!(selection.selected_item(), Some(101));
}

#[test]
fn test_key_navigation_clamps_at_bounds() {
    let (list, mut selection, notifications) = setup(SelectionMode::Single, 3);
    selection.select(102);
    notifications.borrow_mut().clear();

    assert_eq!(key(&list, &mut selection, Key::Down), EventResult::Ignored);
    assert_eq!(selection.selected_item(), Some(102));

    selection.select(100);
    notifications.borrow_mut().clear();
    assert_eq!(key(&list, &mut selection, Key::Up), EventResult::Ignored);
    assert_eq!(selection.selected_item(), Some(100));
    assert!(notifications.borrow().is_empty());
    assert!(list.scrolled().is_empty());
}

#[test]
fn test_key_navigation_without_selection_is_ignored() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 3);
    assert_eq!(key(&list, &mut selection, Key::Down), EventResult::Ignored);
    assert!(selection.is_empty());
}

#[test]
fn test_non_navigation_key_is_ignored() {
    let (list, mut selection, _) = setup(SelectionMode::Multi, 3);
    selection.select(100);
    assert_eq!(key(&list, &mut selection, Key::Enter), EventResult::Ignored);
    let ctrl_down = ContainerEvent::key(KeyCombo::key(Key::Down).ctrl());
    assert_eq!(list.dispatch(&mut selection, &ctrl_down), EventResult::Ignored);
    assert_eq!(selection.selected_items(), vec![100]);
}

#[test]
fn test_vim_keys_from_config() {
    let list = Rc::new(ListContainer::rendered(items(3)));
    let config = SelectionConfig::new(SelectionMode::Single)
        .key_nav(KeyNavConfig::default().vim_keys(true));
    let mut selection = SelectionController::with_config(config);
    selection.bind(Some(&list));
    selection.select(100);

    assert_eq!(key(&list, &mut selection, Key::Char('j')), EventResult::Consumed);
    assert_eq!(selection.selected_item(), Some(101));
}

// ============================================================================
// Hooks
// ============================================================================

#[test]
fn test_default_hooks_ignore() {
    let (list, mut selection, notifications) = setup(SelectionMode::Multi, 3);
    selection.select(101);
    notifications.borrow_mut().clear();

    let double = ContainerEvent::DoubleClick {
        item: Some(101),
        modifiers: Modifiers::NONE,
    };
    assert_eq!(list.dispatch(&mut selection, &double), EventResult::Ignored);
    assert_eq!(key(&list, &mut selection, Key::Left), EventResult::Ignored);
    assert_eq!(key(&list, &mut selection, Key::Right), EventResult::Ignored);
    assert_eq!(selection.selected_items(), vec![101]);
    assert!(notifications.borrow().is_empty());
}

#[test]
fn test_hooks_receive_event_and_selection() {
    let list = Rc::new(ListContainer::rendered(items(3)));
    let opened: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let lefts = Rc::new(Cell::new(0));

    let sink = opened.clone();
    let counter = lefts.clone();
    let hooks: SelectionHooks<u32> = SelectionHooks::new()
        .on_double_click(move |event, selected| {
            if let Some(item) = event.item() {
                sink.borrow_mut().push(*item);
            }
            assert_eq!(selected, &[102]);
            EventResult::Consumed
        })
        .on_key_left(move |_, _| {
            counter.set(counter.get() + 1);
            EventResult::Consumed
        });

    let mut selection = SelectionController::new(SelectionMode::Multi).with_hooks(hooks);
    selection.bind(Some(&list));
    selection.select(102);

    let double = ContainerEvent::DoubleClick {
        item: Some(102),
        modifiers: Modifiers::NONE,
    };
    assert_eq!(list.dispatch(&mut selection, &double), EventResult::Consumed);
    assert_eq!(key(&list, &mut selection, Key::Left), EventResult::Consumed);
    assert_eq!(key(&list, &mut selection, Key::Right), EventResult::Ignored);

    assert_eq!(opened.borrow().as_slice(), &[102]);
    assert_eq!(lefts.get(), 1);
}
