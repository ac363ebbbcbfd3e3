//! Scripted walk through the three selection modes.
//!
//! Logs controller activity to `selkit-demo.log`.

use std::fs::File;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use simplelog::{Config, LevelFilter, WriteLogger};

use selkit::prelude::*;

type Fruits = ListContainer<&'static str>;

fn show(label: &str, list: &Fruits, selection: &SelectionController<Fruits>) {
    let rows: Vec<String> = list
        .items()
        .into_iter()
        .map(|item| {
            let mark = if selection.is_selected(&item) { 'x' } else { ' ' };
            format!("[{mark}] {item}")
        })
        .collect();
    println!("{label}:\n  {}", rows.join("\n  "));
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("selkit-demo.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let fruits = vec!["apple", "banana", "cherry", "date", "elderberry", "fig"];

    // Multi: click, shift-extend, ctrl-toggle, keyboard.
    let list = Rc::new(ListContainer::from_items(fruits.clone()));
    list.on_selection_change(|event| println!("  -> selection changed: {:?}", event.selected));

    let mut selection = SelectionController::new(SelectionMode::Multi);
    selection.bind(Some(&list));

    list.dispatch(&mut selection, &ContainerEvent::click("banana"));
    println!("deferred until render: {}", selection.has_pending_render());
    let render = list.render();
    list.dispatch(&mut selection, &render);

    list.dispatch(&mut selection, &ContainerEvent::click_with("elderberry", Modifiers::SHIFT));
    show("multi after shift-click", &list, &selection);

    list.dispatch(&mut selection, &ContainerEvent::click_with("cherry", Modifiers::CTRL));
    show("multi after ctrl-click", &list, &selection);

    let key = KeyCombo::from_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    if let Some(key) = key {
        let result = list.dispatch(&mut selection, &ContainerEvent::key(key));
        println!("down arrow handled: {}", result.is_handled());
    }
    show("multi after down arrow", &list, &selection);

    // Simple: every click toggles.
    let simple_list = Rc::new(ListContainer::rendered(fruits.clone()));
    let mut simple = SelectionController::new(SelectionMode::Simple);
    simple.bind(Some(&simple_list));
    for item in ["apple", "date", "apple", "fig"] {
        simple_list.dispatch(&mut simple, &ContainerEvent::click(item));
    }
    show("simple after toggles", &simple_list, &simple);

    // Single: select_all degenerates to the first item.
    let single_list = Rc::new(ListContainer::rendered(fruits));
    let mut single = SelectionController::new(SelectionMode::Single);
    single.bind(Some(&single_list));
    single.select_all();
    show("single after select_all", &single_list, &single);

    if let Some(event) = single_list.remove(0) {
        single_list.dispatch(&mut single, &event);
    }
    println!("single after removing the selection: {:?}", single.selected_item());

    Ok(())
}
