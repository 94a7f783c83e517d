//! End-to-end sessions driven through the controller with a recording view.

use pretty_assertions::assert_eq;
use todolist::io::fixture::parse_fixture;
use todolist::model::{Item, ItemFields, Store, TodoList};
use todolist::ops::{Controller, Screen, SessionError, SortColumn, SortCriterion, ViewAdapter};

/// Keeps only what a screen would show: the current screen, link names,
/// the open list's rows and whether the dialog is up
#[derive(Debug, Default)]
struct RecordingView {
    screen: Screen,
    links: Vec<String>,
    rows: Vec<String>,
    detail: Option<String>,
    dialog: bool,
    form: Option<String>,
    renders: usize,
}

impl ViewAdapter for RecordingView {
    fn render(&mut self, screen: Screen) {
        self.screen = screen;
        self.renders += 1;
    }

    fn render_list_links(&mut self, lists: &[TodoList]) {
        self.links = lists.iter().map(|l| l.name.clone()).collect();
    }

    fn render_items(&mut self, list: &TodoList) {
        self.rows = list.items().iter().map(|i| i.description.clone()).collect();
    }

    fn render_list_detail(&mut self, list: &TodoList) {
        self.detail = Some(format!("{} / {}", list.name, list.owner));
        self.render_items(list);
    }

    fn show_confirm_dialog(&mut self) {
        self.dialog = true;
    }

    fn hide_confirm_dialog(&mut self) {
        self.dialog = false;
    }

    fn populate_item_form(&mut self, item: &Item) {
        self.form = Some(item.description.clone());
    }

    fn clear_item_form(&mut self) {
        self.form = None;
    }
}

const FIXTURE: &str = r#"{"lists": [
    {"name": "Groceries", "owner": "Sam", "items": [
        {"description": "B", "due_date": "2024-01-02"},
        {"description": "A", "due_date": "2024-01-01", "completed": true}
    ]},
    {"name": "Chores", "owner": "Alex", "items": [
        {"description": "Laundry"}
    ]}
]}"#;

fn session() -> Controller<RecordingView> {
    let store: Store = parse_fixture(FIXTURE).unwrap().into_iter().collect();
    Controller::new(store, RecordingView::default())
}

fn store_names(c: &Controller<RecordingView>) -> Vec<String> {
    c.store().lists().iter().map(|l| l.name.clone()).collect()
}

#[test]
fn startup_shows_home_with_links() {
    let c = session();
    assert_eq!(c.view().screen, Screen::Home);
    assert_eq!(c.view().links, vec!["Groceries", "Chores"]);
    assert_eq!(c.nav().list_being_edited, None);
}

#[test]
fn open_rename_and_return_home() {
    let mut c = session();
    c.select_list("Chores").unwrap();
    assert_eq!(c.view().screen, Screen::ListDetail);
    assert_eq!(c.view().detail.as_deref(), Some("Chores / Alex"));
    assert_eq!(c.view().links, vec!["Chores", "Groceries"]);

    assert!(c.update_list_name("Housework").unwrap());
    assert!(!c.update_list_name("Housework").unwrap());
    assert!(c.update_list_owner("Sam").unwrap());
    assert_eq!(c.view().links, vec!["Housework", "Groceries"]);

    c.go_home().unwrap();
    assert_eq!(c.view().screen, Screen::Home);
    assert_eq!(c.current_list().map(|l| l.name.clone()), None);
    assert_eq!(c.store().lists()[0].owner, "Sam");
}

#[test]
fn unknown_name_stays_home() {
    let mut c = session();
    let err = c.select_list("Nope").unwrap_err();
    assert!(matches!(err, SessionError::ListNotFound(ref n) if n == "Nope"));
    assert_eq!(c.view().screen, Screen::Home);
    assert_eq!(store_names(&c), vec!["Groceries", "Chores"]);
}

#[test]
fn sort_by_task_then_click_again_reverses() {
    let mut c = session();
    c.select_list("Groceries").unwrap();
    c.sort_items(SortCriterion::TASK_INCREASING).unwrap();
    assert_eq!(c.view().rows, vec!["A", "B"]);
    let criterion = c.click_sort_header(SortColumn::Task).unwrap();
    assert_eq!(criterion, SortCriterion::TASK_DECREASING);
    assert_eq!(c.view().rows, vec!["B", "A"]);
}

#[test]
fn sort_criterion_carries_to_next_list() {
    let mut c = session();
    c.select_list("Groceries").unwrap();
    c.click_sort_header(SortColumn::DueDate).unwrap();
    assert_eq!(c.view().rows, vec!["A", "B"]);
    c.go_home().unwrap();
    c.select_list("Chores").unwrap();
    // Clicking the same header on another list toggles the remembered direction
    let criterion = c.click_sort_header(SortColumn::DueDate).unwrap();
    assert_eq!(criterion, SortCriterion::DUE_DATE_DECREASING);
}

#[test]
fn new_item_filled_then_cancelled_is_discarded() {
    let mut c = session();
    c.select_list("Groceries").unwrap();
    let before = c.current_list().unwrap().len();

    let id = c.create_new_item().unwrap();
    assert_eq!(c.view().screen, Screen::ItemEdit);
    assert_eq!(c.current_list().unwrap().len(), before + 1);

    let discarded = c.cancel_item().unwrap().unwrap();
    assert_eq!(discarded.id(), id);
    assert_eq!(c.current_list().unwrap().len(), before);
    assert_eq!(c.view().screen, Screen::ListDetail);
    assert_eq!(c.view().rows, vec!["B", "A"]);
}

#[test]
fn new_item_submitted_is_kept_at_end() {
    let mut c = session();
    c.select_list("Groceries").unwrap();
    c.create_new_item().unwrap();
    assert_eq!(c.view().form, None);
    c.submit_item(ItemFields {
        description: "C".into(),
        assigned_to: "Sam".into(),
        due_date: "2024-01-03".into(),
        completed: false,
    })
    .unwrap();
    assert_eq!(c.view().rows, vec!["B", "A", "C"]);
    assert_eq!(c.nav().item_being_edited, None);
    assert!(!c.nav().is_new_item_edit);
    assert_eq!(c.store().lists()[0].items()[2].assigned_to, "Sam");
}

#[test]
fn edit_existing_item_and_cancel_keeps_values() {
    let mut c = session();
    c.select_list("Groceries").unwrap();
    c.edit_item(1).unwrap();
    assert_eq!(c.view().form.as_deref(), Some("A"));
    assert_eq!(c.current_item().map(|i| i.description.clone()).as_deref(), Some("A"));
    assert_eq!(c.cancel_item().unwrap().map(|i| i.id()), None);
    assert_eq!(c.view().rows, vec!["B", "A"]);
}

#[test]
fn move_and_delete_items() {
    let mut c = session();
    c.select_list("Groceries").unwrap();
    c.move_item_down(0).unwrap();
    assert_eq!(c.view().rows, vec!["A", "B"]);
    assert!(matches!(
        c.move_item_down(1).unwrap_err(),
        SessionError::List(_)
    ));
    c.move_item_up(1).unwrap();
    assert_eq!(c.view().rows, vec!["B", "A"]);

    let removed = c.delete_item(0).unwrap();
    assert_eq!(removed.description, "B");
    assert_eq!(c.view().rows, vec!["A"]);
    assert!(c.delete_item(5).is_err());
}

#[test]
fn delete_list_confirm_and_cancel() {
    let mut c = session();
    c.select_list("Chores").unwrap();
    c.request_delete_list().unwrap();
    assert!(c.view().dialog);
    // Everything else is refused while the dialog is up
    assert!(c.create_new_item().is_err());
    c.cancel_delete().unwrap();
    assert!(!c.view().dialog);
    assert_eq!(c.store().len(), 2);

    c.request_delete_list().unwrap();
    let removed = c.confirm_delete().unwrap().unwrap();
    assert_eq!(removed.name, "Chores");
    assert!(!c.view().dialog);
    assert_eq!(c.view().links, vec!["Groceries"]);
    assert_eq!(c.nav().list_being_edited, None);
    // Still on the list screen until the caller's delay ends
    assert_eq!(c.view().screen, Screen::ListDetail);
    c.go_home().unwrap();
    assert_eq!(c.view().screen, Screen::Home);
}

#[test]
fn new_list_goes_to_top_and_opens() {
    let mut c = session();
    let id = c.create_new_list().unwrap();
    assert_eq!(c.nav().list_being_edited, Some(id));
    assert_eq!(c.view().links, vec!["Unknown", "Groceries", "Chores"]);
    assert_eq!(c.view().detail.as_deref(), Some("Unknown / Unknown"));
    assert!(c.view().rows.is_empty());
}

#[test]
fn actions_from_wrong_screen_are_refused() {
    let mut c = session();
    let renders = c.view().renders;
    assert!(matches!(
        c.go_home().unwrap_err(),
        SessionError::InvalidTransition { screen: Screen::Home, .. }
    ));
    assert!(c.submit_item(ItemFields::default()).is_err());
    assert!(c.request_delete_list().is_err());
    assert!(c.confirm_delete().is_err());
    assert_eq!(c.view().renders, renders);
    assert_eq!(c.view().screen, Screen::Home);
}
