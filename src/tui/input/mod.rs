mod common;
mod confirm;
mod form;
mod home;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Screen;

use super::app::{App, Mode};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use form::*;
#[allow(unused_imports)]
use home::*;
#[allow(unused_imports)]
use list::*;

/// Handle a key event for the current screen and mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Input is held while a deleted list's screen is leaving
    if app.pending_home.is_some() {
        return;
    }
    app.status_message = None;

    if app.show_help {
        handle_help(app, key);
        return;
    }

    if app.controller.nav().confirm_visible {
        handle_confirm(app, key);
        return;
    }

    match app.mode {
        Mode::EditHeader(field) => handle_header_edit(app, key, field),
        Mode::Navigate => match app.screen() {
            Screen::Home => handle_home(app, key),
            Screen::ListDetail => handle_list(app, key),
            Screen::ItemEdit => handle_form(app, key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppConfig, Item, Store, TodoList};
    use crate::ops::{SortColumn, SortDirection};
    use crate::tui::view::HeaderField;
    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, key(code));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn list(name: &str, owner: &str, items: &[&str]) -> TodoList {
        let mut list = TodoList::with_name(name, owner);
        for desc in items {
            let mut item = Item::new();
            item.description = desc.to_string();
            list.add_item(item);
        }
        list
    }

    fn app_with(lists: Vec<TodoList>) -> App {
        let store: Store = lists.into_iter().collect();
        App::new(store, &AppConfig::default())
    }

    fn row_descriptions(app: &App) -> Vec<String> {
        app.view().rows.iter().map(|r| r.description.clone()).collect()
    }

    fn link_names(app: &App) -> Vec<String> {
        app.view().links.iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn enter_opens_list_under_cursor() {
        let mut app = app_with(vec![list("A", "x", &["a1"]), list("B", "y", &["b1", "b2"])]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::ListDetail);
        assert_eq!(app.view().list_name, "B");
        assert_eq!(row_descriptions(&app), vec!["b1", "b2"]);
        // Opened list moves to the top
        assert_eq!(link_names(&app), vec!["B", "A"]);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app_with(vec![list("A", "x", &[])]);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.home_cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.home_cursor, 0);
    }

    #[test]
    fn new_list_opens_empty() {
        let mut app = app_with(vec![list("A", "x", &["a1"])]);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::ListDetail);
        assert_eq!(app.view().list_name, "Unknown");
        assert!(app.view().rows.is_empty());
        assert_eq!(link_names(&app), vec!["Unknown", "A"]);
    }

    #[test]
    fn enter_on_empty_home_does_nothing() {
        let mut app = app_with(vec![]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn quit_and_help() {
        let mut app = app_with(vec![]);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // Keys are swallowed while help is open
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::Home);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = app_with(vec![list("A", "x", &[])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen(), Screen::ItemEdit);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn add_item_then_submit() {
        let mut app = app_with(vec![list("A", "x", &["a1"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen(), Screen::ItemEdit);
        assert_eq!(app.view().form.fields.description, "Unknown");

        // Clear the placeholder and type a description
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_str(&mut app, "Milk");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_str(&mut app, "2024-05-01");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.view().form.fields.completed);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::ListDetail);
        assert_eq!(row_descriptions(&app), vec!["a1", "Milk"]);
        let row = &app.view().rows[1];
        assert_eq!(row.due_date, "2024-05-01");
        assert_eq!(row.assigned_to, "Unknown");
        assert!(row.completed);
        assert_eq!(app.item_cursor, 1);
    }

    #[test]
    fn cancel_new_item_discards_it() {
        let mut app = app_with(vec![list("A", "x", &["a1"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::ListDetail);
        assert_eq!(row_descriptions(&app), vec!["a1"]);
        assert_eq!(app.view().links[0].item_count, 1);
    }

    #[test]
    fn cancel_existing_edit_keeps_values() {
        let mut app = app_with(vec![list("A", "x", &["a1"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.view().form.fields.description, "a1");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "9");
        assert_eq!(app.view().form.fields.description, "a9");
        press(&mut app, KeyCode::Esc);
        assert_eq!(row_descriptions(&app), vec!["a1"]);
    }

    #[test]
    fn space_only_toggles_on_checkbox() {
        let mut app = app_with(vec![list("A", "x", &["a1"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.view().form.fields.description, "a1 ");
        assert!(!app.view().form.fields.completed);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.view().form.fields.completed);
        // Typing on the checkbox is ignored
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.view().form.fields.description, "a1 ");
    }

    #[test]
    fn delete_item_clamps_cursor() {
        let mut app = app_with(vec![list("A", "x", &["a1", "a2"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.item_cursor, 1);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(row_descriptions(&app), vec!["a1"]);
        assert_eq!(app.item_cursor, 0);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.view().rows.is_empty());
        // Nothing left to delete
        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn move_items_follows_cursor() {
        let mut app = app_with(vec![list("A", "x", &["a1", "a2", "a3"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(row_descriptions(&app), vec!["a2", "a1", "a3"]);
        assert_eq!(app.item_cursor, 1);
        press(&mut app, KeyCode::Char('K'));
        press(&mut app, KeyCode::Char('K'));
        assert_eq!(row_descriptions(&app), vec!["a1", "a2", "a3"]);
        assert_eq!(app.item_cursor, 0);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn sort_keys_toggle_direction() {
        let mut app = app_with(vec![list("A", "x", &["b", "c", "a"])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(row_descriptions(&app), vec!["a", "b", "c"]);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(row_descriptions(&app), vec!["c", "b", "a"]);
        let sort = app.controller.nav().sort.unwrap();
        assert_eq!(sort.column, SortColumn::Task);
        assert_eq!(sort.direction, SortDirection::Decreasing);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(
            app.controller.nav().sort.unwrap().column,
            SortColumn::Status
        );
    }

    #[test]
    fn rename_updates_links_live() {
        let mut app = app_with(vec![list("A", "x", &[])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.mode, Mode::EditHeader(HeaderField::Name));
        type_str(&mut app, "bc");
        assert_eq!(app.view().list_name, "Abc");
        assert_eq!(link_names(&app), vec!["Abc"]);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.controller.store().lists()[0].name, "Ab");

        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "z");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.store().lists()[0].owner, "z");
    }

    #[test]
    fn delete_list_flow_returns_home_after_delay() {
        let mut app = app_with(vec![list("A", "x", &[]), list("B", "y", &[])]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('D'));
        assert!(app.view().confirm_visible);

        // Other keys are swallowed by the dialog
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.screen(), Screen::ListDetail);

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.view().confirm_visible);
        assert_eq!(link_names(&app), vec!["A"]);
        assert!(app.pending_home.is_some());

        // Input is held until the transition fires
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        app.tick(Instant::now() + app.delete_delay);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.controller.nav().list_being_edited.is_none());
    }

    #[test]
    fn cancel_delete_keeps_list() {
        let mut app = app_with(vec![list("A", "x", &[])]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('D'));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.view().confirm_visible);
        assert_eq!(app.controller.store().len(), 1);
        assert!(app.pending_home.is_none());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn modifier_only_keys_are_ignored() {
        let mut app = app_with(vec![]);
        app.status_message = Some("kept".into());
        let mut ev = key(KeyCode::Modifier(crossterm::event::ModifierKeyCode::LeftShift));
        ev.kind = KeyEventKind::Press;
        handle_key(&mut app, ev);
        assert_eq!(app.status_message.as_deref(), Some("kept"));
    }
}
